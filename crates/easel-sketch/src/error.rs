use std::fmt;

use easel_engine::scene::SceneError;

/// Failure of a drawing-context operation.
///
/// These are programming errors in the calling sketch; callers are expected
/// to propagate them with `?` and abandon the sketch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SketchError {
    /// `pop_matrix` (or the end of a scoped root) with no matching push.
    StackUnderflow,
    /// A scoped-root closure returned with frames it pushed still open.
    UnbalancedScope { unclosed: usize },
    /// The scene graph rejected a mutation.
    Scene(SceneError),
}

impl fmt::Display for SketchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SketchError::StackUnderflow => f.write_str("transform stack underflow: pop without matching push"),
            SketchError::UnbalancedScope { unclosed } => {
                write!(f, "scoped root closed with {unclosed} frame(s) still pushed")
            }
            SketchError::Scene(e) => write!(f, "scene error: {e}"),
        }
    }
}

impl std::error::Error for SketchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SketchError::Scene(e) => Some(e),
            _ => None,
        }
    }
}

impl From<SceneError> for SketchError {
    fn from(e: SceneError) -> Self {
        SketchError::Scene(e)
    }
}
