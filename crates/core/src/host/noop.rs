use rust_decimal::Decimal;

use super::traits::{Feedback, Host, InputSource, Prompt, Renderer, Response};
use crate::models::view::ViewModel;

/// Stand-in when the widget runs outside a host shell.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHost;

impl Host for NoopHost {
    fn notify(&mut self, _kind: Feedback) {}
    fn present_action(&mut self, _label: &str) {}
    fn hide_action(&mut self) {}
    fn submit(&mut self, _payload: &str) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NoopRenderer;

impl Renderer for NoopRenderer {
    fn render(&mut self, _view: &ViewModel) {}
}

/// Input source that dismisses every prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInput;

impl InputSource for NoInput {
    fn request_amount(&mut self, _prompt: Prompt) -> Response<Decimal> {
        Response::Cancelled
    }

    fn request_text(&mut self, _prompt: Prompt) -> Response<String> {
        Response::Cancelled
    }

    fn confirm(&mut self, _message: &str) -> bool {
        false
    }
}
