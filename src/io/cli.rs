//! Command-line interface for batch re-layout of block layout files

use crate::algorithm::batch::{BatchReport, snap_objects};
use crate::algorithm::snapper::GridSnapper;
use crate::io::configuration::{LAYOUT_EXTENSION, OUTPUT_SUFFIX};
use crate::io::error::{Result, WithPath, invalid_target};
use crate::io::layout::{GridConfig, Layout};
use crate::io::progress::ProgressManager;
use clap::{ArgAction, Parser};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gridsnap")]
#[command(author, version, about = "Snap every block of a layout onto its grid")]
/// Command-line arguments for the re-layout tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Layout JSON file or directory of layout files to process
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Cell size override in world units
    #[arg(short, long)]
    pub cell_size: Option<f32>,

    /// Lower grid bound override on x (cell index)
    #[arg(long, allow_negative_numbers = true)]
    pub min_x: Option<i32>,

    /// Lower grid bound override on y (cell index)
    #[arg(long, allow_negative_numbers = true)]
    pub min_y: Option<i32>,

    /// Upper grid bound override on x (cell index, exclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max_x: Option<i32>,

    /// Upper grid bound override on y (cell index, exclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub max_y: Option<i32>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Process files even if output exists
    #[arg(short, long)]
    pub no_skip: bool,

    /// Overwrite the input layout instead of writing a sibling file
    #[arg(short, long)]
    pub in_place: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Check if existing output files should be skipped
    pub const fn skip_existing(&self) -> bool {
        !self.no_skip && !self.in_place
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Log filter implied by the verbosity flag
    pub const fn log_level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Apply the grid overrides to a layout's grid parameters
    pub fn grid_config(&self, base: GridConfig) -> GridConfig {
        GridConfig {
            cell_size: self.cell_size.unwrap_or(base.cell_size),
            min: [
                self.min_x.unwrap_or(base.min[0]),
                self.min_y.unwrap_or(base.min[1]),
            ],
            max: [
                self.max_x.unwrap_or(base.max[0]),
                self.max_y.unwrap_or(base.max[1]),
            ],
        }
    }
}

/// Orchestrates batch snapping of layout files with progress tracking
pub struct FileProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl FileProcessor {
    /// Create a new file processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process files according to CLI arguments
    ///
    /// Returns the combined report over all processed files.
    ///
    /// # Errors
    ///
    /// Returns an error if target validation, grid validation or file
    /// processing fails
    pub fn process(&mut self) -> Result<BatchReport> {
        let files = self.collect_files()?;
        let mut total = BatchReport::default();

        if files.is_empty() {
            return Ok(total);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(files.len());
        }

        for (index, file) in files.iter().enumerate() {
            let report = self.process_file(file, index)?;
            total.snapped += report.snapped;
            total.moved += report.moved;
            total.oversize += report.oversize;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(total)
    }

    fn collect_files(&self) -> Result<Vec<PathBuf>> {
        let target = &self.cli.target;
        if target.is_file() {
            if !is_layout(target) {
                return Err(invalid_target(&format!(
                    "'{}' is not a .{LAYOUT_EXTENSION} layout file",
                    target.display()
                )));
            }
            Ok(if self.should_process_file(target) {
                vec![target.clone()]
            } else {
                vec![]
            })
        } else if target.is_dir() {
            let mut files = Vec::new();
            for entry in std::fs::read_dir(target).with_path(target, "read directory")? {
                let path = entry.with_path(target, "read directory")?.path();
                if is_layout(&path) && !is_output(&path) && self.should_process_file(&path) {
                    files.push(path);
                }
            }
            files.sort();
            Ok(files)
        } else {
            Err(invalid_target(&format!(
                "'{}' must be a layout file or directory",
                target.display()
            )))
        }
    }

    fn should_process_file(&self, input_path: &Path) -> bool {
        if !self.cli.skip_existing() {
            return true;
        }

        let output_path = Self::get_output_path(input_path);
        if output_path.exists() {
            log::info!("Skipping: {} (output exists)", input_path.display());
            false
        } else {
            true
        }
    }

    fn process_file(&mut self, input_path: &Path, index: usize) -> Result<BatchReport> {
        let mut layout = Layout::load(input_path)?;

        // A bad grid aborts before any block is touched
        let grid = self.cli.grid_config(layout.grid_config()).build()?;
        let snapper = GridSnapper::new(grid);

        if let Some(ref mut pm) = self.progress_manager {
            pm.start_file(index, input_path, layout.blocks.len());
        }

        let report = snap_objects(&snapper, &mut layout.blocks)?;

        let output_path = if self.cli.in_place {
            input_path.to_path_buf()
        } else {
            Self::get_output_path(input_path)
        };
        layout.save(&output_path)?;

        log::info!(
            "{}: {} blocks, {} moved -> {}",
            input_path.display(),
            report.snapped,
            report.moved,
            output_path.display()
        );

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_file(index);
        }

        Ok(report)
    }

    /// Sibling path the snapped layout is written to
    pub fn get_output_path(input_path: &Path) -> PathBuf {
        let stem = input_path.file_stem().unwrap_or_default();
        let output_name = format!(
            "{}{OUTPUT_SUFFIX}.{LAYOUT_EXTENSION}",
            stem.to_string_lossy()
        );

        if let Some(parent) = input_path.parent() {
            parent.join(output_name)
        } else {
            PathBuf::from(output_name)
        }
    }
}

fn is_layout(path: &Path) -> bool {
    path.extension().and_then(|s| s.to_str()) == Some(LAYOUT_EXTENSION)
}

fn is_output(path: &Path) -> bool {
    path.file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|stem| stem.ends_with(OUTPUT_SUFFIX))
}
