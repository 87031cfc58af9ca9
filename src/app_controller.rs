use anyhow::{Result, Context};
use log::{error, warn, info, debug};
use std::path::{Path, PathBuf};
use indicatif::{ProgressBar, ProgressStyle};

use crate::app_config::Config;
use crate::file_utils::FileManager;
use crate::notebook::{self, NotebookDocument};
use crate::translation::TranslationService;

// @module: Application controller for notebook translation

/// Main application controller for batch notebook translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    // @field: Shared translation service, built once per run
    service: TranslationService,
}

impl Controller {
    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let service = TranslationService::new(config.translation.clone())?;
        Ok(Self { config, service })
    }

    /// Create a controller with an explicit translation service, so tests can
    /// inject a stub provider
    pub fn with_service(config: Config, service: TranslationService) -> Self {
        Self { config, service }
    }

    /// Check if the controller is properly initialized with configuration
    pub fn is_initialized(&self) -> bool {
        !self.config.target_language.is_empty()
    }

    /// Translate a single notebook file.
    ///
    /// The whole document is parsed and translated in memory before the one
    /// output write, so a failure at any earlier step leaves no partial file
    /// behind. The output lands next to the input with the target-language
    /// suffix (e.g. `lesson.ipynb` -> `lesson_en.ipynb`).
    pub async fn run(&self, input_file: PathBuf, force_overwrite: bool) -> Result<PathBuf> {
        if !self.is_initialized() {
            return Err(anyhow::anyhow!("Controller not properly initialized"));
        }

        if !input_file.exists() {
            return Err(anyhow::anyhow!("Input file does not exist: {:?}", input_file));
        }

        let output_path = notebook::derive_output_path(&input_file, &self.config.target_language);
        if output_path.exists() && !force_overwrite {
            warn!("Skipping {}, translation already exists (use -f to force overwrite)", input_file.display());
            return Ok(output_path);
        }

        info!("Working on file: {}", input_file.display());
        let start_time = std::time::Instant::now();

        let content = FileManager::read_to_string(&input_file)?;
        let mut document = NotebookDocument::parse(&content)
            .with_context(|| format!("Failed to parse notebook: {:?}", input_file))?;

        let cell_count = document.cell_count();
        let mut translated_cells = 0;

        // Cells are translated in order; empty source lists pass through
        for index in 0..cell_count {
            let source = document.cell_source(index)?;
            if source.is_empty() {
                continue;
            }

            let translated = self.service
                .translate_lines(&source, &self.config.target_language)
                .await
                .with_context(|| format!("Failed to translate cell {} of {:?}", index, input_file))?;

            document.set_cell_source(index, translated)?;
            translated_cells += 1;
        }

        debug!("Translated {} of {} cells", translated_cells, cell_count);

        let serialized = document.to_json_pretty()?;
        FileManager::write_to_file(&output_path, &serialized)?;

        info!(
            "Success: {} ({} cells in {})",
            output_path.display(),
            translated_cells,
            Self::format_duration(start_time.elapsed())
        );

        Ok(output_path)
    }

    /// Translate every notebook under a directory, recursively.
    ///
    /// Previously translated outputs are skipped during discovery. By default
    /// the first error aborts the whole batch, leaving already-written
    /// outputs in place; with `keep_going` set, failures are reported per
    /// file and the batch continues.
    pub async fn run_folder(&self, input_dir: PathBuf, force_overwrite: bool, keep_going: bool) -> Result<()> {
        let start_time = std::time::Instant::now();

        if !self.is_initialized() {
            return Err(anyhow::anyhow!("Controller not properly initialized"));
        }

        if !FileManager::dir_exists(&input_dir) {
            return Err(anyhow::anyhow!("Input directory does not exist: {:?}", input_dir));
        }

        let notebook_files = FileManager::find_notebooks(&input_dir, &self.config.target_language)?;
        if notebook_files.is_empty() {
            return Err(anyhow::anyhow!("No notebook files found in directory: {:?}", input_dir));
        }

        // Probe the provider once before touching any file, so a bad key or
        // endpoint fails the batch up front
        self.service.test_connection().await
            .context("Translation provider connection test failed")?;

        let folder_pb = ProgressBar::new(notebook_files.len() as u64);
        let template_result = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg} {eta}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        folder_pb.set_style(template_result);
        folder_pb.set_message("Translating notebooks");

        let mut success_count = 0;
        let mut error_count = 0;

        for notebook_file in notebook_files.iter() {
            let file_name = notebook_file.file_name()
                .map(|f| f.to_string_lossy().to_string())
                .unwrap_or_else(|| "unknown".to_string());

            folder_pb.set_message(format!("Translating: {}", file_name));

            match self.run(notebook_file.clone(), force_overwrite).await {
                Ok(_) => {
                    success_count += 1;
                },
                Err(e) => {
                    if !keep_going {
                        folder_pb.finish_and_clear();
                        return Err(e.context(format!("Aborting batch at file: {}", file_name)));
                    }
                    error!("Error processing file {}: {}", file_name, e);
                    error_count += 1;
                }
            }

            folder_pb.inc(1);
        }

        folder_pb.finish_with_message("Folder processing complete");

        info!(
            "Folder processing completed: {} translated, {} errors - Duration: {}",
            success_count,
            error_count,
            Self::format_duration(start_time.elapsed())
        );

        Ok(())
    }

    /// Expected output path for an input file, exposed for tests
    pub fn output_path_for(&self, input_file: &Path) -> PathBuf {
        notebook::derive_output_path(input_file, &self.config.target_language)
    }

    // Format duration in a human-readable format
    fn format_duration(duration: std::time::Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}
