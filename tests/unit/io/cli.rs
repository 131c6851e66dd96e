//! Tests for command-line parsing and batch layout processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use gridsnap::algorithm::batch::BatchReport;
    use gridsnap::io::cli::{Cli, FileProcessor};
    use gridsnap::io::layout::{GridConfig, Layout};
    use gridsnap::SnapError;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    const LAYOUT: &str = r#"{
        "blocks": [
            { "name": "small", "position": [0.2, 0.9], "size": [1.0, 1.0] },
            { "name": "house", "position": [1.0, 1.0], "size": [2.0, 2.0] }
        ]
    }"#;

    fn create_test_cli(target: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["program", target.to_str().unwrap(), "--quiet"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the target argument
    // Verified by changing default flag values
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["program", "level.json"]);

        assert_eq!(cli.target, PathBuf::from("level.json"));
        assert_eq!(cli.cell_size, None);
        assert_eq!(cli.min_x, None);
        assert!(!cli.quiet);
        assert!(!cli.in_place);
        assert_eq!(cli.verbose, 0);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests grid overrides accept negative cell indices
    // Verified by removing allow_negative_numbers
    #[test]
    fn test_cli_parse_grid_overrides() {
        let cli = Cli::parse_from([
            "program",
            "level.json",
            "-c",
            "0.5",
            "--min-x",
            "-4",
            "--min-y",
            "-2",
            "--max-x",
            "4",
            "--max-y",
            "6",
        ]);

        let config = cli.grid_config(GridConfig::default());
        assert_eq!(
            config,
            GridConfig {
                cell_size: 0.5,
                min: [-4, -2],
                max: [4, 6],
            }
        );
    }

    // Tests missing overrides keep the layout's grid values
    // Verified by falling back to the defaults instead of the layout grid
    #[test]
    fn test_partial_override_keeps_base() {
        let cli = Cli::parse_from(["program", "level.json", "--max-y", "3"]);
        let base = GridConfig {
            cell_size: 2.0,
            min: [0, 0],
            max: [8, 8],
        };

        assert_eq!(
            cli.grid_config(base),
            GridConfig {
                cell_size: 2.0,
                min: [0, 0],
                max: [8, 3],
            }
        );
    }

    // Tests in-place runs never skip
    // Verified by honoring the skip check for in-place runs
    #[test]
    fn test_skip_existing_logic() {
        assert!(!Cli::parse_from(["program", "a.json", "--no-skip"]).skip_existing());
        assert!(!Cli::parse_from(["program", "a.json", "--in-place"]).skip_existing());
        assert!(!Cli::parse_from(["program", "a.json", "-q"]).should_show_progress());
    }

    // Tests the verbosity count maps onto log levels
    // Verified by shifting the level table
    #[test]
    fn test_log_level() {
        let level = |args: &[&str]| {
            let mut full = vec!["program", "a.json"];
            full.extend_from_slice(args);
            Cli::parse_from(full).log_level()
        };

        assert_eq!(level(&[]), log::LevelFilter::Warn);
        assert_eq!(level(&["-v"]), log::LevelFilter::Info);
        assert_eq!(level(&["-vv"]), log::LevelFilter::Debug);
        assert_eq!(level(&["-vvvv"]), log::LevelFilter::Trace);
    }

    // Tests a layout file is snapped into a sibling output
    // Verified by saving the layout before snapping
    #[test]
    fn test_process_single_file() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("level.json");
        fs::write(&input, LAYOUT).unwrap();

        let mut processor = FileProcessor::new(create_test_cli(&input, &[]));
        let report = processor.process().unwrap();

        assert_eq!(
            report,
            BatchReport {
                snapped: 2,
                moved: 1,
                oversize: 0,
            }
        );

        let output = FileProcessor::get_output_path(&input);
        assert_eq!(output, temp_dir.path().join("level_snapped.json"));
        let snapped = Layout::load(&output).unwrap();
        let positions: Vec<_> = snapped.blocks.iter().map(|b| b.position).collect();
        assert!((positions[0] - glam::Vec2::splat(0.5)).abs().max_element() < 1e-5);
        assert_eq!(positions[1], glam::Vec2::ONE);

        let original = Layout::load(&input).unwrap();
        assert_eq!(original.blocks[0].position, glam::Vec2::new(0.2, 0.9));
    }

    // Tests existing outputs are skipped and never picked up as inputs
    // Verified by removing the skip check
    #[test]
    fn test_skip_existing_output() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("level.json");
        fs::write(&input, LAYOUT).unwrap();

        let first = FileProcessor::new(create_test_cli(temp_dir.path(), &[]))
            .process()
            .unwrap();
        assert_eq!(first.snapped, 2);

        let second = FileProcessor::new(create_test_cli(temp_dir.path(), &[]))
            .process()
            .unwrap();
        assert_eq!(second, BatchReport::default());

        let forced = FileProcessor::new(create_test_cli(temp_dir.path(), &["--no-skip"]))
            .process()
            .unwrap();
        assert_eq!(forced.snapped, 2, "Only the original layout is an input");
        assert!(!temp_dir.path().join("level_snapped_snapped.json").exists());
    }

    // Tests in-place runs rewrite the input
    // Verified by writing the sibling output in every mode
    #[test]
    fn test_process_in_place() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("level.json");
        fs::write(&input, LAYOUT).unwrap();

        FileProcessor::new(create_test_cli(&input, &["--in-place"]))
            .process()
            .unwrap();

        assert!(!FileProcessor::get_output_path(&input).exists());
        let snapped = Layout::load(&input).unwrap();
        assert!((snapped.blocks[0].position - glam::Vec2::splat(0.5)).abs().max_element() < 1e-5);
    }

    // Tests an invalid grid aborts before any output is written
    // Verified by building the grid after snapping
    #[test]
    fn test_invalid_grid_aborts() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("level.json");
        fs::write(&input, LAYOUT).unwrap();

        let result = FileProcessor::new(create_test_cli(&input, &["-c", "0"])).process();

        assert!(matches!(
            result,
            Err(SnapError::InvalidGrid {
                parameter: "cell_size",
                ..
            })
        ));
        assert!(!FileProcessor::get_output_path(&input).exists());
    }

    // Tests targets that are not layouts are rejected
    // Verified by removing the extension check
    #[test]
    fn test_invalid_targets() {
        let temp_dir = TempDir::new().unwrap();
        let text = temp_dir.path().join("notes.txt");
        fs::write(&text, "not a layout").unwrap();

        let result = FileProcessor::new(create_test_cli(&text, &[])).process();
        assert!(matches!(result, Err(SnapError::InvalidTarget { .. })));

        let missing = temp_dir.path().join("missing.json");
        let result = FileProcessor::new(create_test_cli(&missing, &[])).process();
        assert!(matches!(result, Err(SnapError::InvalidTarget { .. })));
    }

    // Tests malformed layout files surface a parse error with the path
    // Verified by mapping parse failures to file system errors
    #[test]
    fn test_malformed_layout() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("broken.json");
        fs::write(&input, "{ \"blocks\": [ }").unwrap();

        let result = FileProcessor::new(create_test_cli(&input, &[])).process();
        assert!(matches!(result, Err(SnapError::LayoutParse { ref path, .. }) if *path == input));
    }

    // Tests empty directories succeed with nothing to do
    // Verified by adding an error for empty directories
    #[test]
    fn test_process_empty_directory() {
        let temp_dir = TempDir::new().unwrap();

        let report = FileProcessor::new(create_test_cli(temp_dir.path(), &[]))
            .process()
            .unwrap();
        assert_eq!(report, BatchReport::default());
    }
}
