use crate::cli::Cli;
use crate::error::{CliError, Result};
use contactmap::{
    core::io::{
        mmcif::MmcifFile,
        npy::{NpyFile, matrix_output_path},
        traits::StructureFile,
    },
    workflows,
};
use tracing::{info, warn};

pub fn run(cli: &Cli) -> Result<()> {
    info!("Loading input structure from {:?}", &cli.input_path);
    let records = MmcifFile::read_from_path(&cli.input_path).map_err(|e| CliError::FileParsing {
        path: cli.input_path.clone(),
        source: e.into(),
    })?;

    println!("Starting contact map generation...");
    info!("Invoking the core contact map workflow...");

    let matrices = workflows::generate::run(records)?;

    info!("Workflow finished, received {} matrix(es).", matrices.len());

    if matrices.is_empty() {
        warn!("Workflow completed but found no alpha-carbon atoms.");
        println!("Warning: no alpha-carbon atoms found; no matrix files written.");
    } else {
        println!("Workflow complete. Writing {} matrix file(s)...", matrices.len());

        for (chain_id, matrix) in &matrices {
            let output_path = matrix_output_path(&cli.input_path, &cli.output_path, chain_id);
            info!(
                "Writing chain {} matrix ({}x{}) to {:?}",
                chain_id,
                matrix.dim(),
                matrix.dim(),
                &output_path
            );

            NpyFile::write_to_path(matrix, &output_path).map_err(|e| CliError::MatrixWrite {
                path: output_path.clone(),
                source: e,
            })?;

            println!(
                "✓ Chain {} matrix ({}x{}) written to: {}",
                chain_id,
                matrix.dim(),
                matrix.dim(),
                output_path.display()
            );
        }
    }

    Ok(())
}
