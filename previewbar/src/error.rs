use thiserror::Error;

/// Host layouts the preview cannot be set up in.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SetupError {
    /// The container has no scrubber among its children.
    #[error("the container has no scrubber")]
    MissingBar,

    /// No child with the given id is a preview frame.
    #[error("no preview frame with id {0} shares the scrubber's parent")]
    FrameNotFound(u32),

    /// The preview frame was laid out with no area.
    #[error("preview frame {0} has no size")]
    EmptyFrame(u32),
}
