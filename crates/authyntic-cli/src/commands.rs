//! Command implementations for the Authyntic CLI.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use authyntic::prelude::*;
use serde::Serialize;

use crate::config::Settings;

/// Digests of one input, as printed by `digest`.
#[derive(Debug, Serialize)]
struct DigestReport {
    source: String,
    bytes: usize,
    digests: Vec<Digest>,
}

/// Read a file with a contextual error.
fn read_file(path: &Path) -> Result<Vec<u8>> {
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Build one leaf per file, in order. The leaf id is the path as given.
fn leaves_from_files(files: &[PathBuf]) -> Result<Vec<MerkleLeaf>> {
    files
        .iter()
        .map(|path| {
            let content = read_file(path)?;
            let id = path.display().to_string();
            Ok(leaf_from_content(id.clone(), &content)
                .with_metadata("size", content.len())
                .with_metadata("source", id))
        })
        .collect()
}

/// Digest command: hash files, a string, or stdin under several algorithms.
pub fn digest(
    settings: &Settings,
    algorithms: &[HashAlgorithm],
    text: Option<&str>,
    files: &[PathBuf],
) -> Result<()> {
    let algorithms = if algorithms.is_empty() {
        settings.algorithms.as_slice()
    } else {
        algorithms
    };
    if algorithms.is_empty() {
        bail!("No algorithms selected");
    }

    let inputs: Vec<(String, Vec<u8>)> = if let Some(text) = text {
        vec![("text".to_string(), text.as_bytes().to_vec())]
    } else if files.is_empty() {
        let mut buf = Vec::new();
        io::stdin()
            .read_to_end(&mut buf)
            .context("Failed to read stdin")?;
        vec![("stdin".to_string(), buf)]
    } else {
        files
            .iter()
            .map(|path| Ok((path.display().to_string(), read_file(path)?)))
            .collect::<Result<_>>()?
    };

    for (source, bytes) in inputs {
        tracing::info!(%source, bytes = bytes.len(), "hashing input");
        let report = DigestReport {
            digests: multi_digest(&bytes, algorithms),
            bytes: bytes.len(),
            source,
        };
        println!("{}", settings.to_json(&report)?);
    }

    Ok(())
}

/// Commit command: commit files as ordered leaves and emit the batch.
pub fn commit(
    settings: &Settings,
    files: &[PathBuf],
    indices: &[usize],
    output: Option<&Path>,
) -> Result<()> {
    let leaves = leaves_from_files(files)?;

    let batch = if indices.is_empty() {
        commit_all(&leaves)
    } else {
        authyntic::merkle::commit(&leaves, indices)
    }
    .context("Failed to commit batch")?;

    tracing::info!(
        leaves = leaves.len(),
        proofs = batch.proofs.len(),
        root = %batch.root,
        "batch committed"
    );

    let json = settings.to_json(&batch)?;
    match output {
        Some(path) => {
            fs::write(path, json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("{}", batch.root);
        }
        None => println!("{}", json),
    }

    Ok(())
}

/// Verify command: check every proof in a batch file against its root.
pub fn verify(path: &Path) -> Result<()> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let batch: BatchCommitment = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse batch commitment {}", path.display()))?;

    if !verify_all(&batch) {
        bail!("Batch verification failed for root {}", batch.root);
    }

    println!(
        "Verified {} proof(s) under root {}",
        batch.proofs.len(),
        batch.root
    );
    Ok(())
}

/// Root command: print the Merkle root of files.
pub fn root(files: &[PathBuf]) -> Result<()> {
    let leaves = leaves_from_files(files)?;
    match derive_root(&leaves) {
        Some(root) => println!("{}", root),
        None => bail!("No leaves to commit"),
    }
    Ok(())
}
