//! Benchmark for job folder serialization.
//!
//! Builds a set of folders, either synthetic or loaded from a JSON fixture,
//! and times encoding and decoding them.
//!
//! Usage: `bench-folders [FIXTURE.json] [--folders N] [--jobs N] [--out FILE]`

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use job_folder::{decode_folder, encode_folder, validate_folder, JobFolder, JobFolderBuilder, Permission};
use serde::Deserialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use uuid::Uuid;

const DECODE_ITERS: u32 = 10;

// =============================================================================
// JSON FIXTURES
// =============================================================================

#[derive(Debug, Deserialize)]
struct FolderFixture {
    name: String,
    #[serde(default)]
    parent: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    display_in_read_only: bool,
    #[serde(default)]
    is_virtual: bool,
    #[serde(default)]
    children: Vec<String>,
    #[serde(default)]
    jobs: Vec<String>,
    #[serde(default)]
    optimizing_jobs: Vec<String>,
    #[serde(default)]
    files: Vec<String>,
    #[serde(default)]
    permissions: Vec<PermissionFixture>,
}

#[derive(Debug, Deserialize)]
struct PermissionFixture {
    name: String,
    #[serde(default)]
    users: Vec<String>,
    #[serde(default)]
    groups: Vec<String>,
}

impl FolderFixture {
    /// Goes through the mutators so collections end up sorted as in a live store.
    fn into_folder(self) -> JobFolder {
        let mut folder = JobFolderBuilder::new(self.name)
            .parent_name(self.parent)
            .description_opt(self.description)
            .display_in_read_only(self.display_in_read_only)
            .virtual_folder(self.is_virtual)
            .build();
        folder.set_child_names(self.children);
        folder.set_job_ids(self.jobs);
        folder.set_optimizing_job_ids(self.optimizing_jobs);
        folder.set_file_names(self.files);
        for p in self.permissions {
            folder.set_permission(Permission::new(p.name, p.users, p.groups));
        }
        folder
    }
}

// =============================================================================
// SYNTHETIC DATA
// =============================================================================

const PERMISSION_NAMES: [&str; 4] = ["view_job", "schedule_job", "edit_job", "delete_job"];

fn make_synthetic_folders(count: usize, jobs_per_folder: usize) -> Vec<JobFolder> {
    let mut folders = Vec::with_capacity(count + 1);

    let mut root = JobFolder::new("root");
    root.set_description(Some("Synthetic benchmark root".to_string()));
    root.set_child_names((0..count).map(|i| format!("folder-{i:05}")));
    folders.push(root);

    for i in 0..count {
        let mut folder = JobFolderBuilder::new(format!("folder-{i:05}"))
            .parent("root")
            .display_in_read_only(i % 3 == 0)
            .virtual_folder(i % 10 == 0)
            .build();

        for _ in 0..jobs_per_folder {
            folder.add_job_id(Uuid::new_v4().to_string());
        }
        for _ in 0..jobs_per_folder / 10 {
            folder.add_optimizing_job_id(Uuid::now_v7().to_string());
        }
        folder.set_file_names((0..5).map(|f| format!("uploads/{i}/data-{f}.ldif")));

        for name in PERMISSION_NAMES {
            folder.set_permission(Permission::new(name, [format!("user-{}", i % 7)], ["admins", "qa"]));
        }
        folders.push(folder);
    }

    folders
}

// =============================================================================
// ARGUMENTS
// =============================================================================

/// Time job folder encoding and decoding
#[derive(Debug, Parser)]
#[command(name = "bench-folders", version)]
struct Cli {
    /// JSON fixture with folders to load instead of synthetic data
    fixture: Option<PathBuf>,

    /// Number of synthetic folders
    #[arg(short, long, default_value_t = 1_000)]
    folders: usize,

    /// Jobs per synthetic folder
    #[arg(short, long, default_value_t = 100)]
    jobs: usize,

    /// Write the first encoded folder to this file
    #[arg(short, long)]
    out: Option<PathBuf>,
}

fn load_fixture(path: &Path) -> Result<Vec<JobFolder>, String> {
    let json = fs::read_to_string(path).map_err(|e| format!("{}: {e}", path.display()))?;
    let fixtures: Vec<FolderFixture> =
        serde_json::from_str(&json).map_err(|e| format!("{}: {e}", path.display()))?;
    Ok(fixtures.into_iter().map(FolderFixture::into_folder).collect())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Cli::parse();

    let load_start = Instant::now();
    let folders = match &args.fixture {
        Some(path) => match load_fixture(path) {
            Ok(folders) => folders,
            Err(e) => {
                eprintln!("error: {e}");
                std::process::exit(1);
            }
        },
        None => make_synthetic_folders(args.folders, args.jobs),
    };
    info!(folders = folders.len(), elapsed = ?load_start.elapsed(), "prepared folders");

    for folder in &folders {
        if let Err(e) = validate_folder(folder) {
            warn!(folder = folder.name(), error = %e, "folder fails validation");
        }
    }

    // Benchmark encoding
    let encode_start = Instant::now();
    let encoded: Vec<Vec<u8>> = folders.iter().map(encode_folder).collect();
    let encode_time = encode_start.elapsed();
    let total_bytes: usize = encoded.iter().map(Vec::len).sum();

    println!("\nEncode: {:?} for {} folders", encode_time, folders.len());
    println!(
        "  Throughput: {:.2} MB/s",
        (total_bytes as f64 / 1_000_000.0) / encode_time.as_secs_f64()
    );

    // Benchmark decoding
    let decode_start = Instant::now();
    let mut failures = 0usize;
    for _ in 0..DECODE_ITERS {
        for bytes in &encoded {
            if decode_folder(bytes).is_err() {
                failures += 1;
            }
        }
    }
    let decode_time = decode_start.elapsed() / DECODE_ITERS;

    println!("\nDecode: {:?} (avg of {} iterations)", decode_time, DECODE_ITERS);
    println!(
        "  Throughput: {:.2} MB/s",
        (total_bytes as f64 / 1_000_000.0) / decode_time.as_secs_f64()
    );

    // Round-trip check
    let mismatches = folders
        .iter()
        .zip(&encoded)
        .filter(|(folder, bytes)| decode_folder(bytes).ok().as_ref() != Some(*folder))
        .count();

    if let Some(out) = &args.out {
        if let Some(first) = encoded.first() {
            match fs::write(out, first) {
                Ok(()) => info!(path = %out.display(), "wrote first encoded folder"),
                Err(e) => warn!(path = %out.display(), error = %e, "failed to write output"),
            }
        }
    }

    println!("\n=== Summary ===");
    println!("Folders: {}", folders.len());
    println!(
        "Encoded size: {} bytes ({:.1} KB avg per folder)",
        total_bytes,
        total_bytes as f64 / folders.len().max(1) as f64 / 1_000.0
    );
    println!("Decode failures: {}", failures);
    println!("Round-trip mismatches: {}", mismatches);

    if failures > 0 || mismatches > 0 {
        std::process::exit(1);
    }
}
