use thiserror::Error;

/// Failures while bringing up the GPU side of the scene.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to create surface: {0}")]
    CreateSurface(#[from] wgpu::CreateSurfaceError),
    #[error("no compatible GPU adapter")]
    NoAdapter,
    #[error("request_device error: {0}")]
    RequestDevice(#[from] wgpu::RequestDeviceError),
    #[error("surface reports no supported formats")]
    NoSurfaceFormat,
}

/// What a frame loop should do after `Renderer::render` fails.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SurfaceRecovery {
    /// Reconfigure the surface and carry on next frame.
    Reconfigure,
    /// Drop this frame only.
    Skip,
    /// Stop the loop.
    Stop,
}

impl SurfaceRecovery {
    pub fn for_error(err: &wgpu::SurfaceError) -> Self {
        match err {
            wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated => SurfaceRecovery::Reconfigure,
            wgpu::SurfaceError::OutOfMemory => SurfaceRecovery::Stop,
            _ => SurfaceRecovery::Skip,
        }
    }
}
