//! Direct2D overlay rendering.
//!
//! GPU-accelerated, anti-aliased rendering with per-pixel alpha
//! transparency via UpdateLayeredWindow.

use windows::core::{Result, HSTRING};
use windows::Win32::Foundation::{COLORREF, E_OUTOFMEMORY, POINT, RECT, SIZE};
use windows::Win32::Graphics::Direct2D::Common::{
    D2D1_ALPHA_MODE_PREMULTIPLIED, D2D1_COLOR_F, D2D1_FIGURE_BEGIN_FILLED, D2D1_FIGURE_END_CLOSED,
    D2D1_PIXEL_FORMAT, D2D_RECT_F,
};
use windows::Win32::Graphics::Direct2D::{
    D2D1CreateFactory, ID2D1DCRenderTarget, ID2D1Factory, ID2D1PathGeometry, ID2D1RenderTarget,
    ID2D1SolidColorBrush, D2D1_ANTIALIAS_MODE_PER_PRIMITIVE, D2D1_DRAW_TEXT_OPTIONS_NONE,
    D2D1_ELLIPSE, D2D1_FACTORY_TYPE_SINGLE_THREADED, D2D1_RENDER_TARGET_PROPERTIES,
    D2D1_RENDER_TARGET_TYPE_DEFAULT, D2D1_RENDER_TARGET_USAGE_NONE,
};
use windows::Win32::Graphics::DirectWrite::{
    DWriteCreateFactory, IDWriteFactory, IDWriteTextFormat, DWRITE_FACTORY_TYPE_SHARED,
    DWRITE_FONT_STRETCH_NORMAL, DWRITE_FONT_STYLE_NORMAL, DWRITE_FONT_WEIGHT_BOLD,
    DWRITE_MEASURING_MODE_NATURAL, DWRITE_TEXT_METRICS,
};
use windows::Win32::Graphics::Dxgi::Common::DXGI_FORMAT_B8G8R8A8_UNORM;
use windows::Win32::Graphics::Gdi::{
    CreateCompatibleDC, CreateDIBSection, DeleteDC, DeleteObject, GetDC, ReleaseDC, SelectObject,
    BITMAPINFO, BITMAPINFOHEADER, BI_RGB, BLENDFUNCTION, DIB_RGB_COLORS, HBITMAP, HDC, HGDIOBJ,
};
use windows::Win32::UI::WindowsAndMessaging::{
    SetWindowPos, UpdateLayeredWindow, HWND_TOPMOST, SWP_NOACTIVATE, SWP_NOMOVE, SWP_NOSIZE,
    ULW_ALPHA,
};
use windows_numerics::Vector2;

use super::window::LayeredWindow;
use crate::error::{StartupError, StartupResult};
use crate::events::ScrollDirection;
use crate::model::{Color, KeyboardConfig, Point, Rect, Size, WindowRect};
use crate::render::{Canvas, TextMeasure};

/// Device-independent graphics objects shared by every overlay window.
///
/// Single-threaded factories: create and use on the render thread only.
pub struct Graphics {
    d2d: ID2D1Factory,
    dwrite: IDWriteFactory,
    label_format: IDWriteTextFormat,
}

impl Graphics {
    pub fn new(keyboard: &KeyboardConfig) -> StartupResult<Self> {
        unsafe {
            let d2d: ID2D1Factory = D2D1CreateFactory(D2D1_FACTORY_TYPE_SINGLE_THREADED, None)
                .map_err(|e| StartupError::Graphics(format!("Direct2D factory: {e}")))?;
            let dwrite: IDWriteFactory = DWriteCreateFactory(DWRITE_FACTORY_TYPE_SHARED)
                .map_err(|e| StartupError::Graphics(format!("DirectWrite factory: {e}")))?;

            let label_format = dwrite
                .CreateTextFormat(
                    &HSTRING::from(keyboard.font_family),
                    None,
                    DWRITE_FONT_WEIGHT_BOLD,
                    DWRITE_FONT_STYLE_NORMAL,
                    DWRITE_FONT_STRETCH_NORMAL,
                    keyboard.font_size,
                    &HSTRING::from("en-us"),
                )
                .map_err(|e| StartupError::Graphics(format!("label font: {e}")))?;

            Ok(Self {
                d2d,
                dwrite,
                label_format,
            })
        }
    }

    /// Render one frame into `window` and push it to the screen.
    ///
    /// The window is placed at its recorded rect unless `draw` moved it.
    pub fn present<F>(&self, window: &mut LayeredWindow, draw: F) -> Result<()>
    where
        F: FnOnce(&mut D2dCanvas),
    {
        let rect = window.rect();
        let (width, height) = (rect.width, rect.height);

        unsafe {
            let surface = MemorySurface::new(width, height)?;

            let rt_props = D2D1_RENDER_TARGET_PROPERTIES {
                r#type: D2D1_RENDER_TARGET_TYPE_DEFAULT,
                pixelFormat: D2D1_PIXEL_FORMAT {
                    format: DXGI_FORMAT_B8G8R8A8_UNORM,
                    alphaMode: D2D1_ALPHA_MODE_PREMULTIPLIED,
                },
                dpiX: 96.0,
                dpiY: 96.0,
                usage: D2D1_RENDER_TARGET_USAGE_NONE,
                minLevel: Default::default(),
            };
            let dc_rt: ID2D1DCRenderTarget = self.d2d.CreateDCRenderTarget(&rt_props)?;
            let bounds = RECT {
                left: 0,
                top: 0,
                right: width,
                bottom: height,
            };
            dc_rt.BindDC(surface.mem_dc, &bounds)?;
            let rt: ID2D1RenderTarget = dc_rt.into();

            rt.BeginDraw();
            rt.SetAntialiasMode(D2D1_ANTIALIAS_MODE_PER_PRIMITIVE);

            let mut canvas = D2dCanvas {
                rt: &rt,
                graphics: self,
                area: Size::new(width as f32, height as f32),
                moved_to: None,
            };
            draw(&mut canvas);
            let moved_to = canvas.moved_to;

            rt.EndDraw(None, None)?;

            if let Some(top_left) = moved_to {
                window.set_rect(WindowRect {
                    x: top_left.x.round() as i32,
                    y: top_left.y.round() as i32,
                    ..rect
                });
            }
            let rect = window.rect();

            let pt_src = POINT { x: 0, y: 0 };
            let size = SIZE {
                cx: width,
                cy: height,
            };
            let pt_dst = POINT {
                x: rect.x,
                y: rect.y,
            };
            let blend = BLENDFUNCTION {
                BlendOp: 0,
                BlendFlags: 0,
                SourceConstantAlpha: 255,
                AlphaFormat: 1,
            };

            UpdateLayeredWindow(
                window.hwnd(),
                Some(surface.screen_dc),
                Some(&pt_dst),
                Some(&size),
                Some(surface.mem_dc),
                Some(&pt_src),
                COLORREF(0),
                Some(&blend),
                ULW_ALPHA,
            )?;

            // Keep window above taskbar (re-assert topmost position each frame)
            let _ = SetWindowPos(
                window.hwnd(),
                Some(HWND_TOPMOST),
                0,
                0,
                0,
                0,
                SWP_NOMOVE | SWP_NOSIZE | SWP_NOACTIVATE,
            );
        }

        Ok(())
    }
}

/// Screen DC, memory DC and a top-down ARGB DIB selected into it.
/// Released in reverse order on drop.
struct MemorySurface {
    screen_dc: HDC,
    mem_dc: HDC,
    bitmap: HBITMAP,
    old_bitmap: HGDIOBJ,
}

impl MemorySurface {
    unsafe fn new(width: i32, height: i32) -> Result<Self> {
        let screen_dc = GetDC(None);
        let mem_dc = CreateCompatibleDC(Some(screen_dc));

        let bmi = BITMAPINFO {
            bmiHeader: BITMAPINFOHEADER {
                biSize: std::mem::size_of::<BITMAPINFOHEADER>() as u32,
                biWidth: width,
                biHeight: -height, // Top-down
                biPlanes: 1,
                biBitCount: 32,
                biCompression: BI_RGB.0,
                ..Default::default()
            },
            ..Default::default()
        };

        let mut bits: *mut std::ffi::c_void = std::ptr::null_mut();
        let bitmap = match CreateDIBSection(Some(mem_dc), &bmi, DIB_RGB_COLORS, &mut bits, None, 0)
        {
            Ok(bitmap) if !bits.is_null() => bitmap,
            Ok(bitmap) => {
                let _ = DeleteObject(bitmap.into());
                let _ = DeleteDC(mem_dc);
                ReleaseDC(None, screen_dc);
                return Err(E_OUTOFMEMORY.into());
            }
            Err(e) => {
                let _ = DeleteDC(mem_dc);
                ReleaseDC(None, screen_dc);
                return Err(e);
            }
        };
        let old_bitmap = SelectObject(mem_dc, bitmap.into());

        Ok(Self {
            screen_dc,
            mem_dc,
            bitmap,
            old_bitmap,
        })
    }
}

impl Drop for MemorySurface {
    fn drop(&mut self) {
        unsafe {
            SelectObject(self.mem_dc, self.old_bitmap);
            let _ = DeleteObject(self.bitmap.into());
            let _ = DeleteDC(self.mem_dc);
            ReleaseDC(None, self.screen_dc);
        }
    }
}

fn d2d_color(c: Color) -> D2D1_COLOR_F {
    D2D1_COLOR_F {
        r: c.r,
        g: c.g,
        b: c.b,
        a: c.a,
    }
}

fn d2d_rect(r: Rect) -> D2D_RECT_F {
    D2D_RECT_F {
        left: r.left,
        top: r.top,
        right: r.right,
        bottom: r.bottom,
    }
}

fn wide(text: &str) -> Vec<u16> {
    text.encode_utf16().collect()
}

/// `Canvas` over a Direct2D render target for the duration of one frame.
pub struct D2dCanvas<'a> {
    rt: &'a ID2D1RenderTarget,
    graphics: &'a Graphics,
    area: Size,
    moved_to: Option<Point>,
}

impl D2dCanvas<'_> {
    pub fn area(&self) -> Size {
        self.area
    }

    fn brush(&self, color: Color) -> Option<ID2D1SolidColorBrush> {
        unsafe {
            self.rt
                .CreateSolidColorBrush(&d2d_color(color), None)
                .inspect_err(|e| tracing::debug!(error = %e, "brush creation failed"))
                .ok()
        }
    }

    fn arrow_geometry(
        &self,
        direction: ScrollDirection,
        center: Point,
        size: f32,
    ) -> Result<ID2D1PathGeometry> {
        let half = size / 2.0;
        let (tip_y, base_y) = match direction {
            ScrollDirection::Up => (center.y - half, center.y + half),
            ScrollDirection::Down => (center.y + half, center.y - half),
        };

        unsafe {
            let geometry = self.graphics.d2d.CreatePathGeometry()?;
            let sink = geometry.Open()?;
            sink.BeginFigure(Vector2::new(center.x, tip_y), D2D1_FIGURE_BEGIN_FILLED);
            sink.AddLine(Vector2::new(center.x + half, base_y));
            sink.AddLine(Vector2::new(center.x - half, base_y));
            sink.EndFigure(D2D1_FIGURE_END_CLOSED);
            sink.Close()?;
            Ok(geometry)
        }
    }
}

impl TextMeasure for D2dCanvas<'_> {
    fn measure_text(&self, text: &str) -> Size {
        let mut metrics = DWRITE_TEXT_METRICS::default();
        let measured = unsafe {
            self.graphics
                .dwrite
                .CreateTextLayout(
                    &wide(text),
                    &self.graphics.label_format,
                    self.area.width,
                    self.area.height,
                )
                .and_then(|layout| layout.GetMetrics(&mut metrics))
        };
        match measured {
            Ok(()) => Size::new(metrics.width, metrics.height),
            Err(e) => {
                tracing::debug!(error = %e, "text measurement failed");
                Size::default()
            }
        }
    }
}

impl Canvas for D2dCanvas<'_> {
    fn clear(&mut self) {
        unsafe {
            self.rt.Clear(Some(&d2d_color(Color::rgba(0.0, 0.0, 0.0, 0.0))));
        }
    }

    fn move_window(&mut self, top_left: Point) {
        self.moved_to = Some(top_left);
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Color) {
        if let Some(brush) = self.brush(color) {
            let ellipse = D2D1_ELLIPSE {
                point: Vector2::new(center.x, center.y),
                radiusX: radius,
                radiusY: radius,
            };
            unsafe { self.rt.FillEllipse(&ellipse, &brush) };
        }
    }

    fn outline_circle(&mut self, center: Point, radius: f32, width: f32, color: Color) {
        if let Some(brush) = self.brush(color) {
            let ellipse = D2D1_ELLIPSE {
                point: Vector2::new(center.x, center.y),
                radiusX: radius,
                radiusY: radius,
            };
            unsafe { self.rt.DrawEllipse(&ellipse, &brush, width, None) };
        }
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        if let Some(brush) = self.brush(color) {
            unsafe { self.rt.FillRectangle(&d2d_rect(rect), &brush) };
        }
    }

    fn outline_rect(&mut self, rect: Rect, width: f32, color: Color) {
        if let Some(brush) = self.brush(color) {
            unsafe { self.rt.DrawRectangle(&d2d_rect(rect), &brush, width, None) };
        }
    }

    fn draw_text(&mut self, origin: Point, text: &str, color: Color) {
        if let Some(brush) = self.brush(color) {
            let layout = D2D_RECT_F {
                left: origin.x,
                top: origin.y,
                right: self.area.width,
                bottom: self.area.height,
            };
            unsafe {
                self.rt.DrawText(
                    &wide(text),
                    &self.graphics.label_format,
                    &layout,
                    &brush,
                    D2D1_DRAW_TEXT_OPTIONS_NONE,
                    DWRITE_MEASURING_MODE_NATURAL,
                );
            }
        }
    }

    fn draw_glyph(&mut self, direction: ScrollDirection, center: Point, size: f32, color: Color) {
        let Some(brush) = self.brush(color) else {
            return;
        };
        match self.arrow_geometry(direction, center, size) {
            Ok(geometry) => unsafe { self.rt.FillGeometry(&geometry, &brush, None) },
            Err(e) => tracing::debug!(error = %e, "scroll glyph geometry failed"),
        }
    }
}
