use crate::corpus::{Corpus, JobPosting, MatchContext};
use crate::vector::TermVector;
use crate::vectorizer::{TfidfModel, VectorSpace};
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs::{create_dir_all, File};
use std::io::{BufRead, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

pub const ARTIFACT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
pub struct MetaFile {
    pub num_docs: u32,
    pub dim: usize,
    pub version: u32,
}

/// Layout of a directory of fitted artifacts.
pub struct ArtifactPaths {
    pub root: PathBuf,
}

impl ArtifactPaths {
    pub fn new<P: AsRef<Path>>(root: P) -> Self {
        Self { root: root.as_ref().to_path_buf() }
    }
    fn model(&self) -> PathBuf { self.root.join("vectorizer.bin") }
    fn vectors(&self) -> PathBuf { self.root.join("vectors.bin") }
    fn postings(&self) -> PathBuf { self.root.join("postings.jsonl") }
    fn meta(&self) -> PathBuf { self.root.join("meta.json") }
}

fn read_bytes(path: &Path) -> Result<Vec<u8>> {
    let mut f = File::open(path).with_context(|| format!("open {}", path.display()))?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf)?;
    Ok(buf)
}

pub fn save_model(paths: &ArtifactPaths, model: &TfidfModel) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.model())?;
    let bytes = bincode::serialize(model)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_model(paths: &ArtifactPaths) -> Result<TfidfModel> {
    let buf = read_bytes(&paths.model())?;
    let model = bincode::deserialize(&buf).context("decode vectorizer.bin")?;
    Ok(model)
}

pub fn save_vectors(paths: &ArtifactPaths, rows: &[(String, TermVector)]) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.vectors())?;
    let bytes = bincode::serialize(rows)?;
    f.write_all(&bytes)?;
    Ok(())
}

pub fn load_vectors(paths: &ArtifactPaths) -> Result<Vec<(String, TermVector)>> {
    let buf = read_bytes(&paths.vectors())?;
    let rows = bincode::deserialize(&buf).context("decode vectors.bin")?;
    Ok(rows)
}

pub fn save_postings(paths: &ArtifactPaths, postings: &[JobPosting]) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut w = BufWriter::new(File::create(paths.postings())?);
    for p in postings {
        serde_json::to_writer(&mut w, p)?;
        w.write_all(b"\n")?;
    }
    w.flush()?;
    Ok(())
}

/// One posting per line. A line missing `id` or `job_title` is a configuration error.
pub fn load_postings(paths: &ArtifactPaths) -> Result<Vec<JobPosting>> {
    let path = paths.postings();
    let f = File::open(&path).with_context(|| format!("open {}", path.display()))?;
    let mut postings = Vec::new();
    for (lineno, line) in BufReader::new(f).lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() { continue; }
        let posting: JobPosting = serde_json::from_str(&line)
            .with_context(|| format!("postings.jsonl line {}", lineno + 1))?;
        postings.push(posting);
    }
    Ok(postings)
}

pub fn save_meta(paths: &ArtifactPaths, meta: &MetaFile) -> Result<()> {
    create_dir_all(&paths.root)?;
    let mut f = File::create(paths.meta())?;
    let json = serde_json::to_string_pretty(meta)?;
    f.write_all(json.as_bytes())?;
    Ok(())
}

pub fn load_meta(paths: &ArtifactPaths) -> Result<MetaFile> {
    let buf = read_bytes(&paths.meta())?;
    let meta: MetaFile = serde_json::from_slice(&buf).context("decode meta.json")?;
    Ok(meta)
}

/// Load every artifact and assemble the shared, read-only matching context.
pub fn load_context(paths: &ArtifactPaths) -> Result<MatchContext<TfidfModel>> {
    let meta = load_meta(paths)?;
    if meta.version != ARTIFACT_VERSION {
        bail!("unsupported artifact version {} (expected {ARTIFACT_VERSION})", meta.version);
    }
    let model = load_model(paths)?;
    if model.dim() != meta.dim {
        bail!("vectorizer has {} columns but meta.json declares {}", model.dim(), meta.dim);
    }
    let rows = load_vectors(paths)?;
    if rows.len() != meta.num_docs as usize {
        bail!("vectors.bin holds {} rows but meta.json declares {}", rows.len(), meta.num_docs);
    }
    if let Some((id, _)) = rows.iter().find(|(_, v)| !v.is_finite()) {
        bail!("vectors.bin row {id:?} has non-finite weights");
    }
    let postings = load_postings(paths)?;
    let corpus = Corpus::assemble(rows, postings)?;
    let ctx = MatchContext::new(model, corpus)?;
    tracing::info!(root = %paths.root.display(), docs = ctx.corpus().len(), dim = ctx.space().dim(), "loaded artifacts");
    Ok(ctx)
}
