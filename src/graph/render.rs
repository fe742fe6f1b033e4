use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::error::{MulegraphError, Result};
use crate::graph::layout::{spring_layout, DEFAULT_ITERATIONS, DEFAULT_SEED};
use crate::graph::DepGraph;

const CANVAS: (u32, u32) = (1400, 1400);
const MARGIN: f64 = 90.0;
const NODE_RADIUS: i32 = 12;
const ARROW_LENGTH: f64 = 14.0;
const ARROW_HALF_WIDTH: f64 = 5.0;
const TITLE: &str = "MuleSoft dependencies (sampled)";
const NODE_FILL: RGBColor = RGBColor(0x89, 0xCF, 0xF0);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    Written(PathBuf),
    EmptyGraph,
}

/// Rasterizes the graph to `output`, overwriting any existing file. An empty
/// graph writes nothing and reports `EmptyGraph` so the caller can warn.
pub fn render(graph: &DepGraph, output: &Path) -> Result<RenderOutcome> {
    if graph.is_empty() {
        return Ok(RenderOutcome::EmptyGraph);
    }

    let positions = spring_layout(graph, DEFAULT_ITERATIONS, DEFAULT_SEED);
    let pixels: Vec<(f64, f64)> = positions.iter().map(|&(x, y)| to_pixel(x, y)).collect();

    let area = BitMapBackend::new(output, CANVAS).into_drawing_area();
    area.fill(&WHITE).map_err(draw_err)?;
    let area = area
        .titled(TITLE, ("sans-serif", 36).into_font())
        .map_err(draw_err)?;

    for (from, to) in graph.edges() {
        draw_edge(&area, pixels[from.index()], pixels[to.index()])?;
    }

    for (ix, gav) in graph.nodes() {
        let (x, y) = pixels[ix.index()];
        let center = (x as i32, y as i32);
        area.draw(&Circle::new(center, NODE_RADIUS, NODE_FILL.filled()))
            .map_err(draw_err)?;
        area.draw(&Circle::new(center, NODE_RADIUS, BLACK.stroke_width(1)))
            .map_err(draw_err)?;
        area.draw(&Text::new(
            gav.to_string(),
            (center.0 + NODE_RADIUS + 4, center.1 - 7),
            ("sans-serif", 14).into_font(),
        ))
        .map_err(draw_err)?;
    }

    area.present().map_err(draw_err)?;
    Ok(RenderOutcome::Written(output.to_path_buf()))
}

fn to_pixel(x: f64, y: f64) -> (f64, f64) {
    let (w, h) = CANVAS;
    (
        MARGIN + x * (w as f64 - 2.0 * MARGIN),
        MARGIN + y * (h as f64 - 2.0 * MARGIN),
    )
}

/// Line from node edge to node edge, with a filled arrowhead at the target.
fn draw_edge(
    area: &DrawingArea<BitMapBackend<'_>, Shift>,
    from: (f64, f64),
    to: (f64, f64),
) -> Result<()> {
    let dx = to.0 - from.0;
    let dy = to.1 - from.1;
    let dist = (dx * dx + dy * dy).sqrt();
    if dist < 1.0 {
        // self-loop or fully overlapping nodes, nothing sensible to draw
        return Ok(());
    }
    let (ux, uy) = (dx / dist, dy / dist);

    let radius = NODE_RADIUS as f64;
    let start = (from.0 + ux * radius, from.1 + uy * radius);
    let tip = (to.0 - ux * radius, to.1 - uy * radius);
    let base = (tip.0 - ux * ARROW_LENGTH, tip.1 - uy * ARROW_LENGTH);
    let (px, py) = (-uy, ux);

    area.draw(&PathElement::new(
        vec![
            (start.0 as i32, start.1 as i32),
            (base.0 as i32, base.1 as i32),
        ],
        BLACK.stroke_width(2),
    ))
    .map_err(draw_err)?;
    area.draw(&Polygon::new(
        vec![
            (tip.0 as i32, tip.1 as i32),
            (
                (base.0 + px * ARROW_HALF_WIDTH) as i32,
                (base.1 + py * ARROW_HALF_WIDTH) as i32,
            ),
            (
                (base.0 - px * ARROW_HALF_WIDTH) as i32,
                (base.1 - py * ARROW_HALF_WIDTH) as i32,
            ),
        ],
        BLACK.filled(),
    ))
    .map_err(draw_err)?;
    Ok(())
}

fn draw_err<E>(err: E) -> MulegraphError
where
    E: std::error::Error + Send + Sync + 'static,
{
    MulegraphError::Render(anyhow::Error::new(err))
}
