use wgpu::SurfaceError;

/// What the frame loop should do after a surface error.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum SurfaceErrorAction {
    /// Surface was reconfigured; try again next frame.
    Reconfigured,
    /// Transient error; skip this frame.
    SkipFrame,
    /// Unrecoverable (out of memory). The run ends with this error.
    Fatal(SurfaceError),
}

impl SurfaceErrorAction {
    /// The error to end the run with; `None` unless `Fatal`.
    pub fn into_fatal(self) -> Option<anyhow::Error> {
        match self {
            SurfaceErrorAction::Fatal(err) => {
                Some(anyhow::Error::new(err).context("GPU surface cannot be recovered"))
            }
            SurfaceErrorAction::Reconfigured | SurfaceErrorAction::SkipFrame => None,
        }
    }
}
