use eyre::Result;
use eyre::WrapErr;
use playlister_spotify_api::playlist::Playlist;
use std::fmt::Write;
use std::path::Path;

pub const OUTPUT_FILE: &str = "playlists.json";

/// Numbered, human-readable listing of `playlists`.
pub fn format_summary(playlists: &[Playlist]) -> Result<String> {
    let mut out = String::new();
    writeln!(out, "Found {} playlists:\n", playlists.len())?;
    writeln!(out, "{}", "=".repeat(80))?;

    for (i, playlist) in playlists.iter().enumerate() {
        let summary = playlist
            .summary()
            .wrap_err_with(|| format!("Playlist #{} is not an object", i + 1))?;
        let visibility = if summary.is_public() { "Public" } else { "Private" };

        writeln!(out, "{:3}. {}", i + 1, summary.name)?;
        writeln!(
            out,
            "      Owner: {} | Tracks: {} | {}",
            summary.owner_name(),
            summary.track_count(),
            visibility
        )?;
        writeln!(out, "      URL: {}", summary.url())?;
        writeln!(out, "{}", "-".repeat(80))?;
    }

    Ok(out)
}

/// Overwrite `path` with the raw playlists as a pretty-printed JSON array.
pub async fn write_playlists(path: impl AsRef<Path>, playlists: &[Playlist]) -> Result<()> {
    let path = path.as_ref();
    tokio::fs::write(path, serde_json::to_string_pretty(playlists)?)
        .await
        .wrap_err_with(|| format!("Failed to write {}", path.display()))?;
    Ok(())
}
