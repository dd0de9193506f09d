//! SVG export for paths
//!
//! Produces SVG path data (`d` attribute) and minimal standalone documents.
//! Coordinates are written with three decimals, trailing zeros trimmed.

use std::fmt;

use crate::path::{Path, PathCommand};

/// Fill/stroke attributes for an exported path
#[derive(Clone, Debug, PartialEq)]
pub struct SvgStyle {
    pub fill: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: f32,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            fill: Some("black".to_string()),
            stroke: None,
            stroke_width: 1.0,
        }
    }
}

impl SvgStyle {
    pub fn fill(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            ..Default::default()
        }
    }

    pub fn stroke(color: impl Into<String>, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(color.into()),
            stroke_width: width,
        }
    }
}

impl fmt::Display for SvgStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.fill {
            Some(color) => write!(f, "fill=\"{}\"", color)?,
            None => f.write_str("fill=\"none\"")?,
        }
        if let Some(color) = &self.stroke {
            write!(
                f,
                " stroke=\"{}\" stroke-width=\"{}\"",
                color,
                Num(self.stroke_width)
            )?;
        }
        Ok(())
    }
}

/// A single-path SVG document
#[derive(Clone, Debug)]
pub struct SvgDocument {
    width: f32,
    height: f32,
    paths: Vec<(String, SvgStyle)>,
}

impl SvgDocument {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            paths: Vec::new(),
        }
    }

    pub fn add_path(&mut self, path: &Path, style: SvgStyle) {
        self.paths.push((path_to_svg_data(path), style));
    }

    pub fn to_svg_string(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "<?xml version=\"1.0\" encoding=\"UTF-8\"?>")?;
        writeln!(
            f,
            "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">",
            w = Num(self.width),
            h = Num(self.height)
        )?;
        for (data, style) in &self.paths {
            writeln!(f, "  <path d=\"{}\" {}/>", data, style)?;
        }
        writeln!(f, "</svg>")
    }
}

/// Converts a Path to SVG path data string.
pub fn path_to_svg_data(path: &Path) -> String {
    SvgPathData(path).to_string()
}

/// Converts a Path to a complete SVG string.
pub fn path_to_svg(path: &Path, width: f32, height: f32, style: SvgStyle) -> String {
    let mut doc = SvgDocument::new(width, height);
    doc.add_path(path, style);
    doc.to_svg_string()
}

struct SvgPathData<'a>(&'a Path);

impl fmt::Display for SvgPathData<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.0.commands().iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M{},{}", Num(p.x), Num(p.y))?,
                PathCommand::LineTo(p) => write!(f, "L{},{}", Num(p.x), Num(p.y))?,
                PathCommand::CubicTo {
                    control1,
                    control2,
                    end,
                } => write!(
                    f,
                    "C{},{} {},{} {},{}",
                    Num(control1.x),
                    Num(control1.y),
                    Num(control2.x),
                    Num(control2.y),
                    Num(end.x),
                    Num(end.y)
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Three-decimal number without trailing zeros or negative zero
struct Num(f32);

impl fmt::Display for Num {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = format!("{:.3}", self.0);
        let text = if text.contains('.') {
            text.trim_end_matches('0').trim_end_matches('.')
        } else {
            text.as_str()
        };
        if text == "-0" {
            f.write_str("0")
        } else {
            f.write_str(text)
        }
    }
}
