use kurbo::Point;

use crate::{
    assets::{decode::premultiply_rgba8_in_place, font::FontAsset},
    compose::{
        attribution::{AttributionKind, attribution_text},
        blend::{flatten_to_rgb, over_in_place},
        placement::{
            caption_attribution_origin, caption_origin, font_sizes, image_attribution_origin,
            shadow_origin,
        },
        style::{CompositionConfig, Rgba8},
    },
    foundation::error::{MashupError, MashupResult},
    source::model::{CaptionCandidate, ImageCandidate},
    text::{
        layout::{TextBlock, TextLayoutEngine},
        wrap::wrap_words,
    },
};

/// A selected (caption, image) pair plus the layout knobs to render it with.
#[derive(Clone, Copy, Debug)]
pub struct CompositionRequest<'a> {
    pub caption: &'a CaptionCandidate,
    pub image: &'a ImageCandidate,
    pub config: CompositionConfig,
}

/// Bakes captions and credits into rasters.
pub struct Compositor {
    engine: TextLayoutEngine,
}

impl Compositor {
    pub fn new(font: &FontAsset) -> MashupResult<Self> {
        Ok(Self {
            engine: TextLayoutEngine::new(font)?,
        })
    }

    /// Render a request: caption from the caption candidate, credits for both candidates.
    #[tracing::instrument(
        skip_all,
        fields(image = %req.image.permalink, caption = %req.caption.permalink)
    )]
    pub fn compose_request(
        &mut self,
        req: &CompositionRequest<'_>,
        source: &image::RgbaImage,
    ) -> MashupResult<image::RgbImage> {
        let image_credit = attribution_text(
            AttributionKind::Image,
            req.image.author_handle(),
            &req.image.permalink,
        )?;
        let caption_credit = attribution_text(
            AttributionKind::Quote,
            req.caption.author_handle(),
            &req.caption.permalink,
        )?;
        self.compose(
            source,
            &req.caption.text,
            &image_credit,
            &caption_credit,
            &req.config,
        )
    }

    /// Draw `caption` (wrapped, shadowed) and the two credit lines over `source`.
    ///
    /// The output has the source's dimensions and no alpha channel.
    pub fn compose(
        &mut self,
        source: &image::RgbaImage,
        caption: &str,
        image_credit: &str,
        caption_credit: &str,
        config: &CompositionConfig,
    ) -> MashupResult<image::RgbImage> {
        let (width, height) = source.dimensions();
        let width_u16: u16 = width
            .try_into()
            .map_err(|_| MashupError::validation("image width exceeds u16"))?;
        let height_u16: u16 = height
            .try_into()
            .map_err(|_| MashupError::validation("image height exceeds u16"))?;
        let size = (width, height);

        let sizes = font_sizes(width, config.wrap_width);
        let style = config.style;

        let lines = wrap_words(caption, config.wrap_width);
        let block = self.engine.layout_block(&lines, sizes.large as f32)?;
        let origin = caption_origin(
            size,
            (f64::from(block.width), f64::from(block.height)),
            sizes.large,
            config.anchor,
        );
        let shadow = shadow_origin(origin, sizes.large, style.shadow_offset);

        let image_credit = self.engine.layout_line(image_credit, sizes.small as f32)?;
        let caption_credit = self.engine.layout_line(caption_credit, sizes.small as f32)?;
        let image_credit_at = image_attribution_origin(
            size,
            (
                f64::from(image_credit.width()),
                f64::from(image_credit.height()),
            ),
            sizes.small,
        );
        let caption_credit_at = caption_attribution_origin(
            size,
            (
                f64::from(caption_credit.width()),
                f64::from(caption_credit.height()),
            ),
            sizes.small,
        );
        tracing::debug!(
            width,
            height,
            large = sizes.large,
            small = sizes.small,
            lines = block.lines.len(),
            x = origin.x,
            y = origin.y,
            "caption layout"
        );

        let font = self.engine.font_data();
        let mut ctx = vello_cpu::RenderContext::new(width_u16, height_u16);
        draw_block(&mut ctx, font, &block, shadow, style.shadow);
        draw_block(&mut ctx, font, &block, origin, style.caption);
        draw_layout(&mut ctx, font, &image_credit, image_credit_at, style.attribution);
        draw_layout(
            &mut ctx,
            font,
            &caption_credit,
            caption_credit_at,
            style.attribution,
        );
        ctx.flush();

        let mut overlay = vello_cpu::Pixmap::new(width_u16, height_u16);
        ctx.render_to_pixmap(&mut overlay);

        let mut base = source.as_raw().clone();
        premultiply_rgba8_in_place(&mut base);
        over_in_place(&mut base, overlay.data_as_u8_slice())?;

        image::RgbImage::from_raw(width, height, flatten_to_rgb(&base))
            .ok_or_else(|| MashupError::render("composited buffer size mismatch"))
    }
}

fn draw_block(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    block: &TextBlock,
    origin: Point,
    color: Rgba8,
) {
    for line in &block.lines {
        let at = Point::new(origin.x + f64::from(line.x), origin.y + f64::from(line.y));
        draw_layout(ctx, font, &line.layout, at, color);
    }
}

fn draw_layout(
    ctx: &mut vello_cpu::RenderContext,
    font: &vello_cpu::peniko::FontData,
    layout: &parley::Layout<()>,
    origin: Point,
    color: Rgba8,
) {
    if color.a == 0 {
        return;
    }
    ctx.set_transform(vello_cpu::kurbo::Affine::translate((origin.x, origin.y)));
    ctx.set_paint(color.to_paint());

    for line in layout.lines() {
        for item in line.items() {
            let parley::layout::PositionedLayoutItem::GlyphRun(run) = item else {
                continue;
            };
            let glyphs = run.positioned_glyphs().map(|g| vello_cpu::Glyph {
                id: g.id,
                x: g.x,
                y: g.y,
            });
            ctx.glyph_run(font)
                .font_size(run.run().font_size())
                .fill_glyphs(glyphs);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/render.rs"]
mod tests;
