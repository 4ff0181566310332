use std::{
    ffi::OsString,
    path::{Path, PathBuf},
    process::{Command, Stdio},
};

use crate::foundation::error::{VisError, VisResult};

/// Options for turning an exported frame sequence into an MP4.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct Mp4Opts {
    /// Output frames-per-second.
    pub fps: u32,
    /// Whether to overwrite an existing output file.
    pub overwrite: bool,
}

impl Default for Mp4Opts {
    fn default() -> Self {
        Self {
            fps: 30,
            overwrite: true,
        }
    }
}

impl Mp4Opts {
    pub fn validate(&self) -> VisResult<()> {
        if self.fps == 0 {
            return Err(VisError::validation("mp4 fps must be non-zero"));
        }
        Ok(())
    }
}

/// Return `true` when `ffmpeg` can be invoked from `PATH`.
pub fn is_ffmpeg_on_path() -> bool {
    Command::new("ffmpeg")
        .arg("-version")
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map(|s| s.success())
        .unwrap_or(false)
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> VisResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        use anyhow::Context as _;
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}

/// Arguments for reading `frames_dir/%04d.<ext>` and writing an h264 MP4.
pub fn assemble_args(
    frames_dir: &Path,
    extension: &str,
    out_path: &Path,
    opts: &Mp4Opts,
) -> Vec<OsString> {
    let pattern: PathBuf = frames_dir.join(format!("%04d.{extension}"));
    let mut args: Vec<OsString> = Vec::new();
    args.push(if opts.overwrite { "-y" } else { "-n" }.into());
    for a in [
        "-loglevel",
        "error",
        "-framerate",
        &opts.fps.to_string(),
        "-start_number",
        "0",
        "-i",
    ] {
        args.push(a.into());
    }
    args.push(pattern.into_os_string());
    // yuv420p needs even dimensions; pad odd canvases by one pixel.
    for a in [
        "-vf",
        "pad=ceil(iw/2)*2:ceil(ih/2)*2",
        "-an",
        "-c:v",
        "libx264",
        "-pix_fmt",
        "yuv420p",
        "-movflags",
        "+faststart",
    ] {
        args.push(a.into());
    }
    args.push(out_path.as_os_str().to_owned());
    args
}

/// Assemble an exported frame sequence into an MP4 with the system `ffmpeg` binary.
#[tracing::instrument(skip(opts), fields(fps = opts.fps))]
pub fn assemble_mp4(
    frames_dir: &Path,
    extension: &str,
    out_path: &Path,
    opts: &Mp4Opts,
) -> VisResult<()> {
    opts.validate()?;
    if !opts.overwrite && out_path.exists() {
        return Err(VisError::validation(format!(
            "output file '{}' already exists",
            out_path.display()
        )));
    }
    if !is_ffmpeg_on_path() {
        return Err(VisError::encode(
            "ffmpeg is required for MP4 output, but was not found on PATH",
        ));
    }
    ensure_parent_dir(out_path)?;

    // The system binary avoids native FFmpeg dev header/lib requirements.
    let output = Command::new("ffmpeg")
        .args(assemble_args(frames_dir, extension, out_path, opts))
        .stdin(Stdio::null())
        .output()
        .map_err(|e| {
            VisError::encode(format!(
                "failed to spawn ffmpeg (is it installed and on PATH?): {e}"
            ))
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(VisError::encode(format!(
            "ffmpeg exited with status {}: {}",
            output.status,
            stderr.trim()
        )));
    }

    tracing::info!(out = %out_path.display(), "mp4 written");
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/encode/ffmpeg.rs"]
mod tests;
