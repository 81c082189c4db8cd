//! Rendering through the Graphviz engine.
//!
//! Layout and rasterization are entirely delegated: the DOT AST is handed
//! to the `dot` binary via [`graphviz_rust::exec`], which must be installed
//! for anything other than DOT output.

use std::path::Path;

use dot_structures::Graph;
use graphviz_rust::cmd::{CommandArg, Format};
use graphviz_rust::printer::PrinterContext;
use log::{info, warn};

use cloudsketch_core::style::OutputFormat;

use crate::error::SketchError;

/// Prints the DOT AST to DOT source text.
pub(crate) fn print_dot(graph: Graph) -> String {
    graphviz_rust::print(graph, &mut PrinterContext::default())
}

/// Runs the Graphviz engine over the graph, writing the output file.
pub(crate) fn execute(
    graph: Graph,
    format: OutputFormat,
    output: &Path,
) -> Result<(), SketchError> {
    let output = output
        .to_str()
        .ok_or_else(|| SketchError::Render("output path is not valid UTF-8".to_string()))?;

    graphviz_rust::exec(
        graph,
        &mut PrinterContext::default(),
        vec![
            CommandArg::Format(to_graphviz_format(format)),
            CommandArg::Output(output.to_string()),
        ],
    )
    .map_err(|err| {
        SketchError::Render(format!(
            "failed to run the Graphviz 'dot' engine (is Graphviz installed?): {err}"
        ))
    })?;

    info!(output = output; "Graphviz render complete");
    Ok(())
}

fn to_graphviz_format(format: OutputFormat) -> Format {
    match format {
        OutputFormat::Png => Format::Png,
        OutputFormat::Svg => Format::Svg,
        OutputFormat::Pdf => Format::Pdf,
        OutputFormat::Jpeg => Format::Jpg,
        OutputFormat::Dot => Format::Dot,
    }
}

/// Opens a rendered file in the platform viewer.
///
/// Failure to open is logged and swallowed; the render itself already
/// succeeded.
pub(crate) fn open_in_viewer(path: &Path) {
    #[cfg(target_os = "linux")]
    let result = std::process::Command::new("xdg-open").arg(path).spawn();
    #[cfg(target_os = "macos")]
    let result = std::process::Command::new("open").arg(path).spawn();
    #[cfg(target_os = "windows")]
    let result = std::process::Command::new("cmd")
        .args(["/C", "start", ""])
        .arg(path)
        .spawn();

    if let Err(err) = result {
        warn!(path:? = path, err:? = err; "Could not open rendered diagram in viewer");
    }
}
