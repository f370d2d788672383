//! Command line front end.
//!
//! Every subcommand prints one JSON document on stdout.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};

use gd_app::{GifPicker, PickerHost, RefreshOutcome};
use gd_core::config::AppConfig;
use gd_core::{GifEntry, GifId, UploadFile};

use crate::bootstrap::{build_picker, default_config_path, load_config, wire_dependencies};

#[derive(Debug, Parser)]
#[command(name = "gifdock", version, about = "Browse, search and manage a GIF catalog")]
pub struct Cli {
    /// TOML configuration file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Scope catalog requests to this user
    #[arg(long, global = true)]
    pub user: Option<String>,

    /// JSON file of static GIF entries shown next to the catalog
    #[arg(long, global = true)]
    pub static_gifs: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand, PartialEq, Eq)]
pub enum Command {
    /// Show every visible GIF
    List,
    /// Search the catalog, falling back to a local filter
    Search { query: String },
    /// Upload GIF files; files the catalog refuses are kept locally
    Upload {
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },
    /// Remove a GIF by id
    Remove { id: String },
    /// Check a GIF and print its insertion markdown
    Pick { id: String },
    /// Show locally stored uploads
    Cache,
    /// Ask the catalog whether it is up
    Health,
}

impl Cli {
    /// Reads `--config`, else the default config file if present, else nothing.
    pub fn load_config(&self) -> anyhow::Result<AppConfig> {
        match &self.config {
            Some(path) => load_config(path.clone()),
            None => match default_config_path().filter(|path| path.exists()) {
                Some(path) => load_config(path),
                None => Ok(AppConfig::empty()),
            },
        }
    }

    /// Command line flags win over the configuration file.
    pub fn apply_overrides(&self, config: &mut AppConfig) {
        if let Some(user) = &self.user {
            config.user_id = user.clone();
        }
        if let Some(path) = &self.static_gifs {
            config.static_gifs_path = path.clone();
        }
    }
}

pub async fn execute(command: Command, config: &AppConfig) -> anyhow::Result<Value> {
    let output = match command {
        Command::Health => {
            let deps = wire_dependencies(config)?;
            serde_json::to_value(deps.catalog.health().await)?
        }
        Command::Cache => {
            let deps = wire_dependencies(config)?;
            serde_json::to_value(deps.upload_cache.load().await)?
        }
        Command::List => {
            let (picker, refresh) = activate(config).await?;
            json!({
                "refresh": refresh,
                "view": picker.view().await,
            })
        }
        Command::Search { query } => {
            let (picker, _) = activate(config).await?;
            picker.set_filter(&query).await;
            json!({
                "query": query,
                "status": picker.status().await,
                "entries": picker.visible().await,
            })
        }
        Command::Upload { files } => {
            let files = read_upload_files(&files).await?;
            let (picker, _) = activate(config).await?;
            json!({ "reports": picker.upload_files(files).await })
        }
        Command::Remove { id } => {
            let (picker, _) = activate(config).await?;
            let entry = find(&picker, &id).await?;
            json!({ "id": id, "report": picker.remove(&entry).await })
        }
        Command::Pick { id } => {
            let (picker, _) = activate(config).await?;
            let entry = find(&picker, &id).await?;
            let inserted = picker.pick(&entry).await?;
            json!({ "id": id, "inserted": inserted })
        }
    };

    Ok(output)
}

/// The upload cache must be loaded before any write to it.
async fn activate(config: &AppConfig) -> anyhow::Result<(GifPicker, RefreshOutcome)> {
    let picker = build_picker(config, PickerHost::default())?;
    let refresh = picker.activate().await;
    Ok((picker, refresh))
}

async fn find(picker: &GifPicker, id: &str) -> anyhow::Result<GifEntry> {
    picker
        .find(&GifId::from(id))
        .await
        .ok_or_else(|| anyhow!("no GIF with id {id}"))
}

async fn read_upload_files(paths: &[PathBuf]) -> anyhow::Result<Vec<UploadFile>> {
    let mut files = Vec::with_capacity(paths.len());
    for path in paths {
        let bytes = tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read {}", path.display()))?;
        files.push(UploadFile::new(file_name(path), mime_type(path), bytes));
    }
    Ok(files)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn mime_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}
