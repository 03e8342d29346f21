use anyhow::{Context, Result};
use log::info;

#[cfg(feature = "colorized_output")]
use console::style;

use openms_normalyzer::pipeline::{convert, ConvertOptions, DEFAULT_DELIMITER};

use super::config::Config;
use super::Cli;

/// Build conversion options from flags, config file and defaults, in that order of precedence
fn resolve_options(cli: Cli) -> Result<ConvertOptions> {
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    let delim_in = match cli.delim_in {
        Some(d) => d,
        None => config.io.delim_in()?.unwrap_or(DEFAULT_DELIMITER),
    };
    let delim_out = match cli.delim_out {
        Some(d) => d,
        None => config.io.delim_out()?.unwrap_or(DEFAULT_DELIMITER),
    };
    let write_intermediate = !cli.no_intermediate && config.io.write_intermediate.unwrap_or(true);
    let strict_design = cli.strict_design || config.io.strict_design.unwrap_or(false);

    let mut options = ConvertOptions::new(cli.input, cli.output)
        .with_delimiters(delim_in, delim_out)
        .with_intermediate(write_intermediate)
        .with_strict_design(strict_design)
        .with_assembly(config.assembly);
    if let Some(design) = cli.design {
        options = options.with_design(design);
    }
    Ok(options)
}

/// Convert an OpenMS consensus report to NormalyzerDE format
pub fn run(cli: Cli) -> Result<()> {
    let options = resolve_options(cli)?;

    if !options.input.exists() {
        anyhow::bail!("Input file does not exist: {}", options.input.display());
    }

    info!("OpenMS consensus to NormalyzerDE");
    info!("================================");
    info!("Input:  {}", options.input.display());
    info!("Output: {}", options.output.display());
    if let Some(design) = &options.design {
        info!("Design: {}", design.display());
    }
    info!("Annotation columns: {:?}", options.assembly.annotation_attributes);
    info!("Sample columns: {:?}", options.assembly.sample_attributes);

    let summary = convert(&options).with_context(|| {
        format!(
            "Failed to convert {} to {}",
            options.input.display(),
            options.output.display()
        )
    })?;

    if let Some(intermediate) = &summary.intermediate {
        info!("Consensus-only table: {}", intermediate.display());
    }

    println!("{}", summary.preview);

    #[cfg(feature = "colorized_output")]
    {
        println!("{}", style(&summary).bold());
        println!("{}", style("Done!").green().bold());
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        println!("{}", summary);
        println!("Done!");
    }

    Ok(())
}
