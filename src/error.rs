// error.rs - Renderer failures
//
// The only thing that can go wrong is the rendering collaborator. Neither
// variant is fatal: the controller logs and keeps simulating.

use wasm_bindgen::JsValue;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("rendering unavailable: {0}")]
    Unavailable(String),

    #[error("draw failed: {0}")]
    Draw(String),

    #[error("resize failed: {0}")]
    Resize(String),
}

impl From<RenderError> for JsValue {
    fn from(err: RenderError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_failing_call() {
        assert_eq!(RenderError::Draw("lost context".into()).to_string(), "draw failed: lost context");
        assert_eq!(
            RenderError::Resize("bad size".into()).to_string(),
            "resize failed: bad size"
        );
    }
}
