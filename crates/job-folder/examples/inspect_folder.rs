//! Simple decoder to inspect encoded job folder files.

use std::fs;

use job_folder::{decode_folder, validate_folder, JobFolder};

fn format_list(values: &[String], limit: usize) -> String {
    let shown: Vec<&str> = values.iter().take(limit).map(String::as_str).collect();
    if values.len() > limit {
        format!("{} ... and {} more", shown.join(", "), values.len() - limit)
    } else {
        shown.join(", ")
    }
}

fn print_folder(folder: &JobFolder) {
    println!("\n=== Folder ===");
    println!("Name: {}", folder.name());
    println!("Parent: {}", folder.parent_name().unwrap_or("(top level)"));
    if let Some(description) = folder.description() {
        println!("Description: {}", description);
    }
    println!("Read-only display: {}", folder.display_in_read_only());
    println!("Virtual: {}", folder.is_virtual());

    println!("\n=== Contents ===");
    println!("  Children ({}): {}", folder.child_names().len(), format_list(folder.child_names(), 10));
    println!("  Jobs ({}): {}", folder.job_ids().len(), format_list(folder.job_ids(), 10));
    println!(
        "  Optimizing jobs ({}): {}",
        folder.optimizing_job_ids().len(),
        format_list(folder.optimizing_job_ids(), 10)
    );
    println!("  Files ({}): {}", folder.file_names().len(), format_list(folder.file_names(), 10));

    println!("\n=== Permissions ({}) ===", folder.permissions().len());
    for permission in folder.permissions() {
        println!("  {}", permission.name());
        println!("      users: {}", format_list(permission.user_names(), 5));
        println!("      groups: {}", format_list(permission.group_names(), 5));
    }
}

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("usage: inspect_folder <encoded-folder-file>");
        std::process::exit(2);
    };

    println!("Reading: {}", path);

    let data = match fs::read(&path) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };
    println!("File size: {} bytes", data.len());

    let folder = match decode_folder(&data) {
        Ok(folder) => folder,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    print_folder(&folder);

    if let Err(e) = validate_folder(&folder) {
        println!("\nWarning: {}", e);
    }
}
