//! Tests for command-line parsing and end-to-end runs

#[cfg(test)]
mod tests {
    use clap::Parser;
    use image::{Rgb, RgbImage};
    use photomosaic::MosaicError;
    use photomosaic::io::cli::{Cli, MosaicRunner, RunSettings};
    use photomosaic::io::configuration::{DEFAULT_SCALE, DEFAULT_TILE_DIRECTORY};
    use photomosaic::io::sources::SourceOrdering;
    use std::fs;
    use std::io::Cursor;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn cli_for(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("photomosaic").chain(args.iter().copied()))
    }

    // Builds tiles/ with a red and a blue tile plus a red/blue source image
    fn setup_workspace() -> (TempDir, PathBuf, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let tiles = temp_dir.path().join("tiles");
        fs::create_dir(&tiles).unwrap();
        RgbImage::from_pixel(6, 4, Rgb([255, 0, 0]))
            .save(tiles.join("red.png"))
            .unwrap();
        RgbImage::from_pixel(3, 3, Rgb([0, 0, 255]))
            .save(tiles.join("blue.png"))
            .unwrap();

        let source = temp_dir.path().join("source.png");
        RgbImage::from_fn(25, 10, |x, _| {
            if x < 10 {
                Rgb([240, 10, 10])
            } else {
                Rgb([10, 10, 240])
            }
        })
        .save(&source)
        .unwrap();

        (temp_dir, tiles, source)
    }

    // Tests CLI parsing with only the source argument
    // Verified by changing default values to ensure defaults are used
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = cli_for(&["input.png"]);

        assert_eq!(cli.source, Some(PathBuf::from("input.png")));
        assert_eq!(cli.tiles, PathBuf::from(DEFAULT_TILE_DIRECTORY));
        assert_eq!(cli.scale, DEFAULT_SCALE);
        assert_eq!(cli.tile_size, None);
        assert_eq!(cli.seed, None);
        assert_eq!(cli.order, SourceOrdering::FileName);
        assert!(!cli.parallel);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
        assert!(!cli.needs_prompt());
    }

    // Tests CLI parsing with all available arguments
    // Verified by renaming long flags
    #[test]
    fn test_cli_parse_all_args() {
        let cli = cli_for(&[
            "input.png",
            "--tiles",
            "lib",
            "--tile-size",
            "16",
            "--scale",
            "3",
            "--output",
            "out.png",
            "--seed",
            "9",
            "--order",
            "path",
            "--skip-invalid",
            "--parallel",
            "--no-skip",
            "--quiet",
            "--verbose",
        ]);

        assert_eq!(cli.tiles, PathBuf::from("lib"));
        assert_eq!(cli.tile_size, Some(16));
        assert_eq!(cli.scale, 3);
        assert_eq!(cli.output, Some(PathBuf::from("out.png")));
        assert_eq!(cli.seed, Some(9));
        assert_eq!(cli.order, SourceOrdering::Path);
        assert!(cli.skip_invalid && cli.parallel && cli.verbose);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());
    }

    // Tests prompting is used without a source or when requested
    // Verified by inverting the source check
    #[test]
    fn test_needs_prompt() {
        assert!(cli_for(&[]).needs_prompt());
        assert!(cli_for(&["a.png", "-i"]).needs_prompt());
        assert!(!cli_for(&["a.png", "-s", "4"]).needs_prompt());
    }

    // Tests settings resolution from flags and the default output path
    // Verified by dropping the output suffix
    #[test]
    fn test_run_settings_from_cli() {
        let settings = RunSettings::from_cli(&cli_for(&["pics/cat.jpg", "-s", "8", "-x", "2"])).unwrap();

        assert_eq!(settings.source, PathBuf::from("pics/cat.jpg"));
        assert_eq!(settings.output, PathBuf::from("pics/cat_mosaic.jpg"));
        assert_eq!(settings.config.tile_size(), 8);
        assert_eq!(settings.config.scale(), 2);
        assert!(!settings.overwrite);
    }

    // Tests missing or invalid values surface as configuration errors
    // Verified by defaulting the tile size
    #[test]
    fn test_run_settings_errors() {
        let missing = RunSettings::from_cli(&cli_for(&["cat.png"]));
        assert!(matches!(
            missing,
            Err(MosaicError::Configuration {
                parameter: "tile_size",
                ..
            })
        ));

        let zero_scale = RunSettings::from_cli(&cli_for(&["cat.png", "-s", "4", "-x", "0"]));
        assert!(matches!(
            zero_scale,
            Err(MosaicError::Configuration {
                parameter: "scale",
                ..
            })
        ));
    }

    // Tests output naming for paths with and without directories or extensions
    // Verified by placing output in the working directory
    #[test]
    fn test_get_output_path() {
        assert_eq!(
            MosaicRunner::get_output_path(Path::new("a/b/photo.png")),
            PathBuf::from("a/b/photo_mosaic.png")
        );
        assert_eq!(
            MosaicRunner::get_output_path(Path::new("photo")),
            PathBuf::from("photo_mosaic.png")
        );
    }

    // Tests a full run writes a mosaic with the expected size and tiles
    // Verified by disabling the save step
    #[test]
    fn test_run_end_to_end() {
        let (temp_dir, tiles, source) = setup_workspace();
        let output = temp_dir.path().join("out/mosaic.png");
        let mut runner = MosaicRunner::new(cli_for(&[
            source.to_str().unwrap(),
            "--tiles",
            tiles.to_str().unwrap(),
            "-s",
            "5",
            "-x",
            "2",
            "-o",
            output.to_str().unwrap(),
            "--seed",
            "1",
            "-q",
        ]));

        runner.process().unwrap();

        let mosaic = image::open(&output).unwrap().to_rgb8();
        assert_eq!(mosaic.dimensions(), (50, 20));
        assert_eq!(mosaic.get_pixel(0, 0), &Rgb([255, 0, 0]));
        assert_eq!(mosaic.get_pixel(19, 19), &Rgb([255, 0, 0]));
        assert_eq!(mosaic.get_pixel(20, 0), &Rgb([0, 0, 255]));
        assert_eq!(mosaic.get_pixel(49, 19), &Rgb([0, 0, 255]));
    }

    // Tests the parallel path produces the same mosaic when no ties exist
    // Verified by skipping rows in parallel mode
    #[test]
    fn test_run_parallel_matches_sequential() {
        let (temp_dir, tiles, source) = setup_workspace();
        let sequential = temp_dir.path().join("seq.png");
        let parallel = temp_dir.path().join("par.png");

        for (output, extra) in [(&sequential, None), (&parallel, Some("--parallel"))] {
            let mut args = vec![
                source.to_str().unwrap(),
                "--tiles",
                tiles.to_str().unwrap(),
                "-s",
                "5",
                "-o",
                output.to_str().unwrap(),
                "-q",
            ];
            args.extend(extra);
            MosaicRunner::new(cli_for(&args)).process().unwrap();
        }

        assert_eq!(
            image::open(&sequential).unwrap().to_rgb8(),
            image::open(&parallel).unwrap().to_rgb8()
        );
    }

    // Tests existing outputs are left alone unless --no-skip is given
    // Verified by inverting skip logic
    #[test]
    fn test_existing_output_skipped() {
        let (temp_dir, tiles, source) = setup_workspace();
        let output = temp_dir.path().join("existing.png");
        fs::write(&output, "keep me").unwrap();
        let base = [
            source.to_str().unwrap(),
            "--tiles",
            tiles.to_str().unwrap(),
            "-s",
            "5",
            "-o",
            output.to_str().unwrap(),
            "-q",
        ];

        MosaicRunner::new(cli_for(&base)).process().unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "keep me");

        let mut overwrite = base.to_vec();
        overwrite.push("--no-skip");
        MosaicRunner::new(cli_for(&overwrite)).process().unwrap();
        assert!(image::open(&output).is_ok());
    }

    // Tests undecodable tiles abort the run unless skipping is requested
    // Verified by always skipping invalid tiles
    #[test]
    fn test_invalid_tile_handling() {
        let (temp_dir, tiles, source) = setup_workspace();
        fs::write(tiles.join("corrupt.png"), "garbage").unwrap();
        let output = temp_dir.path().join("out.png");
        let base = [
            source.to_str().unwrap(),
            "--tiles",
            tiles.to_str().unwrap(),
            "-s",
            "5",
            "-o",
            output.to_str().unwrap(),
            "-q",
        ];

        let strict = MosaicRunner::new(cli_for(&base)).process();
        assert!(matches!(strict, Err(MosaicError::ImageLoad { .. })));
        assert!(!output.exists());

        let mut lenient = base.to_vec();
        lenient.push("--skip-invalid");
        MosaicRunner::new(cli_for(&lenient)).process().unwrap();
        assert!(output.exists());
    }

    // Tests an empty tile directory fails with an empty library and no output
    // Verified by composing with a blank library
    #[test]
    fn test_empty_tile_directory() {
        let (temp_dir, _tiles, source) = setup_workspace();
        let empty = temp_dir.path().join("empty");
        fs::create_dir(&empty).unwrap();
        let output = temp_dir.path().join("out.png");

        let result = MosaicRunner::new(cli_for(&[
            source.to_str().unwrap(),
            "--tiles",
            empty.to_str().unwrap(),
            "-s",
            "5",
            "-o",
            output.to_str().unwrap(),
            "-q",
        ]))
        .process();

        assert!(matches!(result, Err(MosaicError::EmptyLibrary)));
        assert!(!output.exists());
    }

    // Tests a source smaller than one tile fails before reading tiles
    // Verified by building the library first
    #[test]
    fn test_undersized_source() {
        let (temp_dir, _tiles, source) = setup_workspace();

        let result = MosaicRunner::new(cli_for(&[
            source.to_str().unwrap(),
            "--tiles",
            temp_dir.path().join("missing").to_str().unwrap(),
            "-s",
            "11",
            "-q",
        ]))
        .process();

        assert!(matches!(result, Err(MosaicError::Configuration { .. })));
    }

    // Tests interactive settings resolve into a validated run
    // Verified by ignoring the prompted scale
    #[test]
    fn test_prompt_settings() {
        let (temp_dir, _tiles, source) = setup_workspace();
        let runner = MosaicRunner::new(cli_for(&["-q"]));
        let output = temp_dir.path().join("prompted.png");
        let input = format!(
            "{}\n5\n4\n{}\n\n",
            source.display(),
            output.display()
        );

        let settings = runner
            .prompt_settings(Cursor::new(input), Vec::new())
            .unwrap();

        assert_eq!(settings.source, source);
        assert_eq!(settings.output, output);
        assert_eq!(settings.config.scaled_tile_size(), 20);
        assert!(settings.overwrite);
    }

    // Tests a confirmed prompt output replaces an existing file
    // Verified by applying the skip-existing check to prompted runs
    #[test]
    fn test_prompted_output_overwrites_existing() {
        let (temp_dir, tiles, source) = setup_workspace();
        let output = temp_dir.path().join("chosen.png");
        fs::write(&output, "stale").unwrap();
        let mut runner = MosaicRunner::new(cli_for(&[
            "--tiles",
            tiles.to_str().unwrap(),
            "--seed",
            "2",
            "-q",
        ]));
        let input = format!("{}\n5\n1\n{}\n\n", source.display(), output.display());

        let settings = runner
            .prompt_settings(Cursor::new(input), Vec::new())
            .unwrap();
        runner.run(&settings).unwrap();

        let mosaic = image::open(&output).unwrap().to_rgb8();
        assert_eq!(mosaic.dimensions(), (25, 10));
    }
}
