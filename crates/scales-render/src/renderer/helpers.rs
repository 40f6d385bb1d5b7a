pub(crate) const DEPTH_FORMAT: wgpu::TextureFormat = wgpu::TextureFormat::Depth32Float;

pub(crate) fn create_depth_texture(
    device: &wgpu::Device,
    width: u32,
    height: u32,
) -> (wgpu::Texture, wgpu::TextureView) {
    let tex = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("depth_tex"),
        size: wgpu::Extent3d {
            width: width.max(1),
            height: height.max(1),
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format: DEPTH_FORMAT,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        view_formats: &[],
    });
    let view = tex.create_view(&wgpu::TextureViewDescriptor::default());
    (tex, view)
}

/// Prefer an sRGB swapchain format, then one with an sRGB view variant.
///
/// WebGPU canvases only offer `Bgra8Unorm`, `Rgba8Unorm` and `Rgba16Float`.
pub(crate) fn pick_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| f.is_srgb())
        .or_else(|| formats.iter().copied().find(|f| f.add_srgb_suffix().is_srgb()))
        .or_else(|| formats.first().copied())
}

/// Format the passes render through. Shaders output linear color, so this is
/// the sRGB variant whenever the surface format has one.
pub(crate) fn render_view_format(surface_format: wgpu::TextureFormat) -> wgpu::TextureFormat {
    surface_format.add_srgb_suffix()
}

/// Extra view formats the surface must allow for [`render_view_format`].
pub(crate) fn surface_view_formats(surface_format: wgpu::TextureFormat) -> Vec<wgpu::TextureFormat> {
    let view = render_view_format(surface_format);
    if view == surface_format {
        vec![]
    } else {
        vec![view]
    }
}

/// The header scene is composited over the page, so keep alpha when the
/// platform allows it.
pub(crate) fn pick_alpha_mode(modes: &[wgpu::CompositeAlphaMode]) -> wgpu::CompositeAlphaMode {
    if modes.contains(&wgpu::CompositeAlphaMode::PreMultiplied) {
        wgpu::CompositeAlphaMode::PreMultiplied
    } else {
        modes
            .first()
            .copied()
            .unwrap_or(wgpu::CompositeAlphaMode::Auto)
    }
}

pub(crate) fn depth_state(write: bool) -> wgpu::DepthStencilState {
    wgpu::DepthStencilState {
        format: DEPTH_FORMAT,
        depth_write_enabled: write,
        depth_compare: wgpu::CompareFunction::Less,
        stencil: wgpu::StencilState::default(),
        bias: wgpu::DepthBiasState::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn srgb_format_wins_when_offered() {
        let formats = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Bgra8UnormSrgb,
        ];
        assert_eq!(
            pick_surface_format(&formats),
            Some(wgpu::TextureFormat::Bgra8UnormSrgb)
        );
        assert_eq!(
            pick_surface_format(&[wgpu::TextureFormat::Rgba16Float]),
            Some(wgpu::TextureFormat::Rgba16Float)
        );
        assert_eq!(pick_surface_format(&[]), None);
    }

    #[test]
    fn webgpu_canvas_formats_render_through_srgb_view() {
        let canvas = [
            wgpu::TextureFormat::Bgra8Unorm,
            wgpu::TextureFormat::Rgba8Unorm,
            wgpu::TextureFormat::Rgba16Float,
        ];
        let Some(format) = pick_surface_format(&canvas) else {
            panic!("canvas formats should yield a surface format");
        };
        assert_eq!(format, wgpu::TextureFormat::Bgra8Unorm);
        assert!(render_view_format(format).is_srgb());
        assert_eq!(
            surface_view_formats(format),
            vec![wgpu::TextureFormat::Bgra8UnormSrgb]
        );
        // the float format is never preferred over an encodable one
        assert_eq!(
            pick_surface_format(&[wgpu::TextureFormat::Rgba16Float, wgpu::TextureFormat::Rgba8Unorm]),
            Some(wgpu::TextureFormat::Rgba8Unorm)
        );
    }

    #[test]
    fn srgb_surfaces_need_no_extra_view_format() {
        let format = wgpu::TextureFormat::Bgra8UnormSrgb;
        assert_eq!(render_view_format(format), format);
        assert!(surface_view_formats(format).is_empty());
    }

    #[test]
    fn premultiplied_alpha_preferred() {
        let modes = [
            wgpu::CompositeAlphaMode::Opaque,
            wgpu::CompositeAlphaMode::PreMultiplied,
        ];
        assert_eq!(
            pick_alpha_mode(&modes),
            wgpu::CompositeAlphaMode::PreMultiplied
        );
        assert_eq!(
            pick_alpha_mode(&[wgpu::CompositeAlphaMode::Opaque]),
            wgpu::CompositeAlphaMode::Opaque
        );
    }
}
