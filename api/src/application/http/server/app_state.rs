use std::sync::Arc;

use smartchef_core::application::SmartChefService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SmartChefService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SmartChefService) -> Self {
        Self { args, service }
    }
}
