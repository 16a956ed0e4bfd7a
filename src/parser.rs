//! Route file parsing for GPX and KML tracks.
//!
//! GPX points are read from the first non-empty source among track
//! segments, routes, and standalone waypoints. KML coordinates are collected
//! from every `coordinates` element in document order, at any nesting depth.

use std::path::Path;

use quick_xml::events::Event;
use quick_xml::Reader;

use crate::error::{Result, ScoutError};
use crate::route::{Coordinate, Route};

/// Track file formats accepted by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteFormat {
    Gpx,
    Kml,
}

impl RouteFormat {
    /// Resolve a format tag such as `"gpx"` or `"KML"`.
    pub fn from_extension(tag: &str) -> Result<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "gpx" => Ok(RouteFormat::Gpx),
            "kml" => Ok(RouteFormat::Kml),
            _ => Err(ScoutError::UnsupportedFormat(tag.to_string())),
        }
    }

    /// Resolve the format from a file name's extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| ScoutError::UnsupportedFormat(path.display().to_string()))?;
        Self::from_extension(ext)
    }
}

/// Decode a route file. A well-formed file with no coordinates yields an empty route.
pub fn parse_route(content: &[u8], format: RouteFormat) -> Result<Route> {
    let route = match format {
        RouteFormat::Gpx => parse_gpx(content)?,
        RouteFormat::Kml => parse_kml(content)?,
    };
    tracing::debug!(?format, points = route.len(), "Parsed route file");
    Ok(route)
}

pub fn parse_gpx(content: &[u8]) -> Result<Route> {
    let gpx = gpx::read(content)?;

    let to_coord = |wpt: &gpx::Waypoint| {
        let point = wpt.point();
        Coordinate::new(point.y(), point.x())
    };

    let mut points: Vec<Coordinate> = gpx
        .tracks
        .iter()
        .flat_map(|track| track.segments.iter())
        .flat_map(|segment| segment.points.iter())
        .map(to_coord)
        .collect();

    if points.is_empty() {
        points = gpx
            .routes
            .iter()
            .flat_map(|route| route.points.iter())
            .map(to_coord)
            .collect();
    }

    if points.is_empty() {
        points = gpx.waypoints.iter().map(to_coord).collect();
    }

    Ok(Route::new(points))
}

pub fn parse_kml(content: &[u8]) -> Result<Route> {
    let root = XmlNode::parse(content)?;
    let mut points = Vec::new();
    collect_coordinates(&root, &mut points)?;
    Ok(Route::new(points))
}

/// Element tree with namespaces stripped from names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct XmlNode {
    pub name: String,
    pub text: String,
    pub children: Vec<XmlNode>,
}

impl XmlNode {
    /// Parse a document into its root element.
    pub fn parse(content: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(content);
        reader.trim_text(true);

        let mut buf = Vec::new();
        let mut stack: Vec<XmlNode> = Vec::new();
        let mut root: Option<XmlNode> = None;

        loop {
            match reader.read_event_into(&mut buf)? {
                Event::Eof => break,
                Event::Start(e) => {
                    stack.push(XmlNode::named(e.local_name().as_ref()));
                }
                Event::Empty(e) => {
                    let node = XmlNode::named(e.local_name().as_ref());
                    attach(&mut stack, &mut root, node)?;
                }
                Event::End(_) => {
                    let node = stack
                        .pop()
                        .ok_or_else(|| ScoutError::Parse("unexpected closing tag".to_string()))?;
                    attach(&mut stack, &mut root, node)?;
                }
                Event::Text(t) => {
                    if let Some(node) = stack.last_mut() {
                        node.push_text(&t.unescape()?);
                    }
                }
                Event::CData(t) => {
                    if let Some(node) = stack.last_mut() {
                        node.push_text(&String::from_utf8_lossy(&t.into_inner()));
                    }
                }
                _ => {}
            }
            buf.clear();
        }

        if let Some(open) = stack.last() {
            return Err(ScoutError::Parse(format!("unclosed element <{}>", open.name)));
        }
        root.ok_or_else(|| ScoutError::Parse("document has no root element".to_string()))
    }

    fn named(raw: &[u8]) -> Self {
        Self {
            name: String::from_utf8_lossy(raw).into_owned(),
            ..Default::default()
        }
    }

    /// Append a text chunk, separated from any earlier chunk by a space.
    fn push_text(&mut self, chunk: &str) {
        if !self.text.is_empty() {
            self.text.push(' ');
        }
        self.text.push_str(chunk);
    }
}

fn attach(stack: &mut [XmlNode], root: &mut Option<XmlNode>, node: XmlNode) -> Result<()> {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None if root.is_none() => *root = Some(node),
        None => return Err(ScoutError::Parse("multiple root elements".to_string())),
    }
    Ok(())
}

/// Depth-first walk collecting every `coordinates` element's points in document order.
pub fn collect_coordinates(root: &XmlNode, out: &mut Vec<Coordinate>) -> Result<()> {
    let mut pending = vec![root];
    while let Some(node) = pending.pop() {
        if node.name == "coordinates" {
            out.extend(parse_coordinate_list(&node.text)?);
        }
        pending.extend(node.children.iter().rev());
    }
    Ok(())
}

/// Parse whitespace-separated `lon,lat[,alt]` tuples into latitude-first coordinates.
///
/// Tuples with fewer than two fields are skipped.
fn parse_coordinate_list(text: &str) -> Result<Vec<Coordinate>> {
    let mut coords = Vec::new();
    for tuple in text.split_whitespace() {
        let mut parts = tuple.split(',');
        let (Some(lon), Some(lat)) = (parts.next(), parts.next()) else {
            continue;
        };
        let lon = parse_degrees(lon, tuple)?;
        let lat = parse_degrees(lat, tuple)?;
        coords.push(Coordinate::new(lat, lon));
    }
    Ok(coords)
}

fn parse_degrees(field: &str, tuple: &str) -> Result<f64> {
    field
        .trim()
        .parse::<f64>()
        .map_err(|_| ScoutError::Parse(format!("invalid coordinate '{}'", tuple)))
}
