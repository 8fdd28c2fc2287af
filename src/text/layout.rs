use crate::{
    assets::font::FontAsset,
    foundation::error::{MashupError, MashupResult},
};

/// One shaped line of a [`TextBlock`], positioned relative to the block's top-left corner.
pub struct BlockLine {
    pub layout: parley::Layout<()>,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A stack of shaped lines, each centered horizontally within the block.
pub struct TextBlock {
    pub lines: Vec<BlockLine>,
    pub width: f32,
    pub height: f32,
}

impl TextBlock {
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Shapes text with a single registered font.
pub struct TextLayoutEngine {
    font_ctx: parley::FontContext,
    layout_ctx: parley::LayoutContext<()>,
    family_name: String,
    font: vello_cpu::peniko::FontData,
}

impl TextLayoutEngine {
    pub fn new(font: &FontAsset) -> MashupResult<Self> {
        let mut font_ctx = parley::FontContext::default();
        let families = font_ctx
            .collection
            .register_fonts(parley::fontique::Blob::from(font.bytes.to_vec()), None);
        let family_id = families.first().map(|(id, _)| *id).ok_or_else(|| {
            MashupError::render(format!("no font families registered from '{}'", font.name))
        })?;
        let family_name = font_ctx
            .collection
            .family_name(family_id)
            .ok_or_else(|| MashupError::render("registered font family has no name"))?
            .to_string();

        let font_data = vello_cpu::peniko::FontData::new(
            vello_cpu::peniko::Blob::from(font.bytes.as_ref().clone()),
            0,
        );

        Ok(Self {
            font_ctx,
            layout_ctx: parley::LayoutContext::new(),
            family_name,
            font: font_data,
        })
    }

    pub fn family_name(&self) -> &str {
        &self.family_name
    }

    /// Font handle for the rasterizer.
    pub fn font_data(&self) -> &vello_cpu::peniko::FontData {
        &self.font
    }

    /// Shape a single line without wrapping.
    pub fn layout_line(&mut self, text: &str, size_px: f32) -> MashupResult<parley::Layout<()>> {
        if !size_px.is_finite() || size_px <= 0.0 {
            return Err(MashupError::validation(
                "text size_px must be finite and > 0",
            ));
        }

        let mut builder = self
            .layout_ctx
            .ranged_builder(&mut self.font_ctx, text, 1.0, true);
        builder.push_default(parley::style::StyleProperty::FontStack(
            parley::style::FontStack::Source(std::borrow::Cow::Owned(self.family_name.clone())),
        ));
        builder.push_default(parley::style::StyleProperty::FontSize(size_px));

        let mut layout: parley::Layout<()> = builder.build(text);
        layout.break_all_lines(None);
        Ok(layout)
    }

    /// Shape pre-wrapped lines into a centered block.
    pub fn layout_block(&mut self, lines: &[String], size_px: f32) -> MashupResult<TextBlock> {
        let mut shaped = Vec::with_capacity(lines.len());
        for line in lines {
            let layout = self.layout_line(line, size_px)?;
            let width = layout.width();
            let height = layout.height();
            shaped.push((layout, width, height));
        }

        let block_width = shaped.iter().map(|(_, w, _)| *w).fold(0.0f32, f32::max);
        let mut y = 0.0f32;
        let mut out = Vec::with_capacity(shaped.len());
        for (layout, width, height) in shaped {
            out.push(BlockLine {
                layout,
                x: (block_width - width) / 2.0,
                y,
                width,
                height,
            });
            y += height;
        }

        Ok(TextBlock {
            lines: out,
            width: block_width,
            height: y,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/text/layout.rs"]
mod tests;
