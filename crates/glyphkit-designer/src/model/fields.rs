//! Field writes for the external property channel.
//!
//! The property panel funnels edits through a single `(field, value)`
//! pair; this module resolves the name against the shared base and the
//! variant extras and produces the replacement object.

use glyphkit_core::{DesignerError, PropertyValue, Result};

use super::DesignObject;

fn number(field: &str, value: &PropertyValue) -> Result<f64> {
    value
        .as_number()
        .ok_or_else(|| DesignerError::InvalidFieldValue {
            field: field.to_string(),
        })
}

fn string(field: &str, value: &PropertyValue) -> Result<String> {
    value
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| DesignerError::InvalidFieldValue {
            field: field.to_string(),
        })
}

fn boolean(field: &str, value: &PropertyValue) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| DesignerError::InvalidFieldValue {
            field: field.to_string(),
        })
}

impl DesignObject {
    /// Returns a copy with one named field replaced.
    ///
    /// Position writes route through [`DesignObject::at_position`] so the
    /// path anchor invariant holds for panel edits exactly as it does for
    /// gestures.
    pub fn with_field(&self, field: &str, value: &PropertyValue) -> Result<DesignObject> {
        // Shared base fields first.
        match field {
            "x" => return Ok(self.at_position(number(field, value)?, self.y())),
            "y" => return Ok(self.at_position(self.x(), number(field, value)?)),
            "width" => {
                let mut changed = self.clone();
                changed.base_mut().width = Some(number(field, value)?);
                return Ok(changed);
            }
            "height" => {
                let mut changed = self.clone();
                changed.base_mut().height = Some(number(field, value)?);
                return Ok(changed);
            }
            "rotate" => {
                let mut changed = self.clone();
                changed.base_mut().rotate = number(field, value)?;
                return Ok(changed);
            }
            "fill" => {
                let mut changed = self.clone();
                changed.base_mut().fill = Some(string(field, value)?);
                return Ok(changed);
            }
            "stroke" => {
                let mut changed = self.clone();
                changed.base_mut().stroke = Some(string(field, value)?);
                return Ok(changed);
            }
            "stroke_width" => {
                let mut changed = self.clone();
                changed.base_mut().stroke_width = Some(number(field, value)?);
                return Ok(changed);
            }
            "blend_mode" => {
                let mut changed = self.clone();
                changed.base_mut().blend_mode = Some(string(field, value)?);
                return Ok(changed);
            }
            _ => {}
        }

        // Variant extras.
        let mut changed = self.clone();
        match &mut changed {
            DesignObject::Text(text) => match field {
                "text" => text.text = string(field, value)?,
                "font_weight" => text.font_weight = string(field, value)?,
                "font_style" => text.font_style = string(field, value)?,
                "text_decoration" => text.text_decoration = string(field, value)?,
                "font_size" => text.font_size = number(field, value)?,
                "font_family" => text.font_family = string(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            DesignObject::Rect(rect) => match field {
                "radius" => rect.radius = number(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            DesignObject::Path(path) => match field {
                "closed" => path.closed = boolean(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            DesignObject::Image(image) => match field {
                "href" => image.href = string(field, value)?,
                _ => return Err(self.unknown_field(field)),
            },
            DesignObject::Circle(_) => return Err(self.unknown_field(field)),
        }
        Ok(changed)
    }

    fn unknown_field(&self, field: &str) -> DesignerError {
        DesignerError::UnknownField {
            kind: self.kind().as_str().to_string(),
            field: field.to_string(),
        }
    }
}
