use image::{DynamicImage, GenericImageView, RgbaImage};

use crate::gesture::{Canvas, GestureDispatcher, GestureState, InputEvent, Outcome};
use crate::model::{ContainerSize, ImageSize, ModelError, ToolState};
use crate::surface::{MaskBuffer, RasterSurface, encode_png, finalize};
use crate::viewport::Viewport;

use super::{ApplyPayload, EditorConfig, EditorHost, EditorVariant, Result, SessionError};

/// Live state of an open editor. Dropped as a whole on apply or cancel.
struct Workspace<S: RasterSurface> {
    source: DynamicImage,
    canvas: Canvas<S>,
    dispatcher: GestureDispatcher,
}

/// One run of the mask editor, from open to apply or cancel.
pub struct EditorSession<H: EditorHost, S: RasterSurface = MaskBuffer> {
    host: H,
    variant: EditorVariant,
    prompt: String,
    workspace: Option<Workspace<S>>,
}

impl<H: EditorHost> EditorSession<H, MaskBuffer> {
    /// Decodes `bytes` and opens on the result. Nothing is opened if decoding fails.
    pub fn open_encoded(
        bytes: &[u8],
        container: ContainerSize,
        config: &EditorConfig,
        variant: EditorVariant,
        host: H,
    ) -> Result<Self> {
        let source = image::load_from_memory(bytes)?;
        Self::open(source, container, config, variant, host)
    }

    pub fn open(
        source: DynamicImage,
        container: ContainerSize,
        config: &EditorConfig,
        variant: EditorVariant,
        host: H,
    ) -> Result<Self> {
        let (width, height) = source.dimensions();
        let size = ImageSize::new(width, height)?;
        let surface = MaskBuffer::new(size, config.paint_style());
        Self::with_surface(source, surface, container, config, variant, host)
    }

    /// Paint colour and alpha over the source, for display.
    pub fn overlay(&self) -> Option<RgbaImage> {
        self.workspace
            .as_ref()
            .map(|workspace| workspace.canvas.surface().overlay())
    }
}

impl<H: EditorHost, S: RasterSurface> EditorSession<H, S> {
    /// Opens on a host-provided surface, which must match the source size.
    pub fn with_surface(
        source: DynamicImage,
        surface: S,
        container: ContainerSize,
        config: &EditorConfig,
        variant: EditorVariant,
        host: H,
    ) -> Result<Self> {
        config.validate()?;
        let (width, height) = source.dimensions();
        let image = ImageSize::new(width, height)?;
        if surface.size() != image {
            return Err(SessionError::SizeMismatch {
                image,
                surface: surface.size(),
            });
        }
        if !(container.width.is_finite()
            && container.height.is_finite()
            && container.width > 0.0
            && container.height > 0.0)
        {
            return Err(ModelError::InvalidContainer(format!(
                "{}x{}",
                container.width, container.height
            ))
            .into());
        }

        let viewport = Viewport::fit(
            image,
            container,
            config.zoom_bounds(),
            config.max_initial_zoom,
        );
        log::info!(
            "opened {}x{} mask editor ({:?}) at zoom {:.3}",
            image.width,
            image.height,
            variant,
            viewport.zoom()
        );

        let canvas = Canvas::new(surface, viewport, config.brush());
        Ok(Self {
            host,
            variant,
            prompt: String::new(),
            workspace: Some(Workspace {
                source,
                canvas,
                dispatcher: GestureDispatcher::new(config.wheel_sensitivity),
            }),
        })
    }

    pub fn is_open(&self) -> bool {
        self.workspace.is_some()
    }

    pub fn variant(&self) -> EditorVariant {
        self.variant
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn set_prompt(&mut self, prompt: impl Into<String>) {
        self.prompt = prompt.into();
    }

    pub fn source(&self) -> Option<&DynamicImage> {
        self.workspace.as_ref().map(|workspace| &workspace.source)
    }

    pub fn canvas(&self) -> Option<&Canvas<S>> {
        self.workspace.as_ref().map(|workspace| &workspace.canvas)
    }

    pub fn gesture_state(&self) -> Option<&GestureState> {
        self.workspace
            .as_ref()
            .map(|workspace| workspace.dispatcher.state())
    }

    pub fn tools(&self) -> Option<ToolState> {
        self.workspace
            .as_ref()
            .map(|workspace| workspace.dispatcher.tools())
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn into_host(self) -> H {
        self.host
    }

    /// Feeds one input event. A close request cancels the session.
    pub fn handle(&mut self, event: &InputEvent) -> Result<Outcome> {
        let Some(workspace) = self.workspace.as_mut() else {
            log::debug!("input after close ignored");
            return Ok(Outcome::Ignored);
        };
        let outcome = workspace
            .dispatcher
            .dispatch(event, &mut workspace.canvas)?;
        if outcome == Outcome::CloseRequested {
            self.cancel();
        }
        Ok(outcome)
    }

    /// Clearing an empty mask would only throw away redo entries.
    pub fn can_clear(&self) -> bool {
        self.canvas().is_some_and(|canvas| !canvas.is_empty())
    }

    /// False while the mask is empty or unreadable, or while a replacement
    /// session has no prompt.
    pub fn can_apply(&self) -> bool {
        let Some(workspace) = self.workspace.as_ref() else {
            return false;
        };
        if workspace.canvas.is_empty() {
            return false;
        }
        match self.variant {
            EditorVariant::Removal => true,
            EditorVariant::Replacement => !self.prompt.trim().is_empty(),
        }
    }

    /// Finalizes the mask, hands it to the host and closes the session.
    pub fn apply(&mut self) -> Result<()> {
        if self.workspace.is_none() {
            return Err(SessionError::Closed);
        }
        if !self.can_apply() {
            log::warn!("apply requested while unavailable");
            return Err(SessionError::ApplyUnavailable(self.unavailable_reason()));
        }
        let Some(workspace) = self.workspace.as_ref() else {
            return Err(SessionError::Closed);
        };

        let size = workspace.canvas.surface().size();
        let mask = finalize(workspace.canvas.surface())?;
        let mask_png = encode_png(&mask)?;
        let prompt = match self.variant {
            EditorVariant::Removal => None,
            EditorVariant::Replacement => Some(self.prompt.trim().to_string()),
        };

        self.workspace = None;
        log::info!("mask applied ({} bytes)", mask_png.len());
        self.host.on_apply(ApplyPayload {
            mask_png,
            width: size.width,
            height: size.height,
            prompt,
        });
        Ok(())
    }

    /// Discards the session without touching the pipeline.
    pub fn cancel(&mut self) {
        if self.workspace.take().is_some() {
            log::info!("mask editor cancelled");
            self.host.on_close();
        }
    }

    fn unavailable_reason(&self) -> String {
        if self.canvas().is_some_and(|canvas| canvas.is_empty()) {
            "mask is empty".to_string()
        } else {
            "replacement prompt is empty".to_string()
        }
    }
}
