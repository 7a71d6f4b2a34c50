// Fetches the all-MiniLM-L6-v2 sentence embedding model.
//
// The ONNX export and its tokenizer come from the sentence-transformers repo
// on HuggingFace and land in the platform data directory
// (~/.local/share/reviewlens/models/ on Linux), so one download serves every
// later run. Each file streams into a `.part` sibling that is renamed once
// the body is complete; an interrupted download never looks like a model.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::AsyncWriteExt;
use tracing::{debug, info};

const EMBEDDING_REPO_URL: &str =
    "https://huggingface.co/sentence-transformers/all-MiniLM-L6-v2/resolve/main";

/// A file the embedder needs: where it lives in the repo and what it is
/// called on disk.
struct ModelFile {
    remote: &'static str,
    local: &'static str,
    /// Large enough to deserve a progress bar
    large: bool,
}

const EMBEDDING_FILES: &[ModelFile] = &[
    ModelFile {
        remote: "tokenizer.json",
        local: "tokenizer.json",
        large: false,
    },
    ModelFile {
        remote: "onnx/model.onnx",
        local: "model.onnx",
        large: true,
    },
];

/// Platform data directory for reviewlens models, or `./reviewlens/models`
/// when the platform has none.
pub fn default_model_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("reviewlens")
        .join("models")
}

pub fn embedding_model_dir(base: &Path) -> PathBuf {
    base.join("all-MiniLM-L6-v2")
}

/// Whether every embedder file is on disk under `base`.
pub fn embedding_files_present(base: &Path) -> bool {
    let dir = embedding_model_dir(base);
    EMBEDDING_FILES.iter().all(|f| dir.join(f.local).exists())
}

/// Download whichever embedder files are missing under `base`.
pub async fn download_model(base: &Path) -> Result<()> {
    let dir = embedding_model_dir(base);
    tokio::fs::create_dir_all(&dir)
        .await
        .with_context(|| format!("Failed to create model directory {}", dir.display()))?;

    println!("\nSentence embedding model (all-MiniLM-L6-v2):");

    let client = reqwest::Client::new();
    for file in EMBEDDING_FILES {
        let dest = dir.join(file.local);
        if dest.exists() {
            debug!(file = file.local, "Model file present, skipping");
            println!("  {} (already exists)", file.local);
            continue;
        }

        println!("  Fetching {}...", file.local);
        let url = format!("{EMBEDDING_REPO_URL}/{}", file.remote);
        fetch(&client, &url, &dest, file.large).await?;
    }

    Ok(())
}

fn partial_path(dest: &Path) -> PathBuf {
    let mut name = dest.file_name().unwrap_or_default().to_os_string();
    name.push(".part");
    dest.with_file_name(name)
}

async fn fetch(client: &reqwest::Client, url: &str, dest: &Path, large: bool) -> Result<()> {
    let mut response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .with_context(|| format!("Request for {url} failed"))?;

    let pb = if large {
        Some(byte_progress(response.content_length())?)
    } else {
        None
    };

    let part = partial_path(dest);
    let mut out = tokio::fs::File::create(&part)
        .await
        .with_context(|| format!("Failed to create {}", part.display()))?;

    let mut written: u64 = 0;
    while let Some(chunk) = response
        .chunk()
        .await
        .with_context(|| format!("Connection dropped while reading {url}"))?
    {
        out.write_all(&chunk)
            .await
            .with_context(|| format!("Failed to write {}", part.display()))?;
        written += chunk.len() as u64;
        if let Some(pb) = &pb {
            pb.set_position(written);
        }
    }
    out.flush().await?;
    drop(out);

    tokio::fs::rename(&part, dest)
        .await
        .with_context(|| format!("Failed to move {} into place", part.display()))?;

    if let Some(pb) = pb {
        pb.finish_and_clear();
    }
    info!(url, bytes = written, dest = %dest.display(), "Model file downloaded");
    Ok(())
}

fn byte_progress(total: Option<u64>) -> Result<ProgressBar> {
    let (pb, style) = match total {
        Some(len) => (
            ProgressBar::new(len),
            ProgressStyle::default_bar()
                .template("    [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({eta})")?
                .progress_chars("=> "),
        ),
        None => (
            ProgressBar::new_spinner(),
            ProgressStyle::default_spinner().template("    {spinner} {bytes}")?,
        ),
    };
    pb.set_style(style);
    Ok(pb)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_model_dir_is_under_reviewlens() {
        let dir = default_model_dir();
        assert!(dir.ends_with("reviewlens/models"), "got {}", dir.display());
    }

    #[test]
    fn test_embedding_files_present() {
        let dir = tempfile::tempdir().unwrap();
        assert!(!embedding_files_present(dir.path()));

        let embed_dir = embedding_model_dir(dir.path());
        std::fs::create_dir_all(&embed_dir).unwrap();
        std::fs::write(embed_dir.join("model.onnx"), b"fake").unwrap();
        assert!(!embedding_files_present(dir.path()));

        std::fs::write(embed_dir.join("tokenizer.json"), b"fake").unwrap();
        assert!(embedding_files_present(dir.path()));
    }

    #[test]
    fn test_partial_download_is_not_a_model() {
        let dir = tempfile::tempdir().unwrap();
        let embed_dir = embedding_model_dir(dir.path());
        std::fs::create_dir_all(&embed_dir).unwrap();
        std::fs::write(embed_dir.join("tokenizer.json"), b"fake").unwrap();
        std::fs::write(partial_path(&embed_dir.join("model.onnx")), b"half").unwrap();
        assert!(!embedding_files_present(dir.path()));
    }

    #[test]
    fn test_partial_path_keeps_directory() {
        let dest = Path::new("/models/all-MiniLM-L6-v2/model.onnx");
        assert_eq!(
            partial_path(dest),
            Path::new("/models/all-MiniLM-L6-v2/model.onnx.part")
        );
    }

    #[test]
    fn test_local_names_match_embedder_loader() {
        let names: Vec<&str> = EMBEDDING_FILES.iter().map(|f| f.local).collect();
        assert_eq!(names, vec!["tokenizer.json", "model.onnx"]);
    }
}
