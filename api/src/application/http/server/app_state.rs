use std::sync::Arc;

use symptomatic_core::application::SymptomaticService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: SymptomaticService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: SymptomaticService) -> Self {
        Self { args, service }
    }
}
