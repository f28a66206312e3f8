// src/presentation/http/state.rs
use crate::application::services::ApplicationServices;
use crate::config::Platform;
use crate::presentation::http::metrics::HitCounter;
use std::{path::PathBuf, sync::Arc};

#[derive(Clone)]
pub struct HttpState {
    pub services: Arc<ApplicationServices>,
    pub hits: Arc<HitCounter>,
    pub platform: Platform,
    pub polka_key: Option<Arc<str>>,
    pub fileserver_root: PathBuf,
}
