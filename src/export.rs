// Pose Overlay 🚀 AGPL-3.0 License

//! Recording and CSV export of landmark frames.
//!
//! The recorder is a passive sink: frames are appended in memory and written
//! out as a row-oriented text table, one row per landmark slot per frame, in
//! frame order then landmark-index order. The format is stable and
//! reproducible byte-for-byte:
//!
//! ```text
//! Frame,Timestamp,CoordType,LandmarkIndex,LandmarkName,X,Y,Z,Visibility,Presence
//! ```
//!
//! Positions are formatted to 6 decimal digits, confidences to 3. Absent
//! landmarks and absent confidence channels leave their fields empty.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::{OverlayError, Result};
use crate::landmark::{Landmark, LandmarkSet};
use crate::visualizer::skeleton;

/// CSV header row.
pub const CSV_HEADER: &str =
    "Frame,Timestamp,CoordType,LandmarkIndex,LandmarkName,X,Y,Z,Visibility,Presence";

/// Coordinate space a recorded landmark set is expressed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordType {
    /// Metric world coordinates.
    World,
    /// Image-normalized coordinates in [0, 1].
    Normalized,
}

impl fmt::Display for CoordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::World => write!(f, "World"),
            Self::Normalized => write!(f, "Normalized"),
        }
    }
}

impl std::str::FromStr for CoordType {
    type Err = OverlayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "World" => Ok(Self::World),
            "Normalized" => Ok(Self::Normalized),
            other => Err(OverlayError::ExportError(format!(
                "unknown coordinate type '{other}'"
            ))),
        }
    }
}

/// One recorded frame of landmarks.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedFrame {
    /// Zero-based frame index, assigned at record time.
    pub frame: usize,
    /// Timestamp in seconds when the frame was recorded.
    pub timestamp: f64,
    /// Coordinate space of the landmarks.
    pub coord_type: CoordType,
    /// The landmark set captured for this frame.
    pub landmarks: LandmarkSet,
}

/// In-memory frame recorder with CSV export.
///
/// Export failures are recoverable: a failed write leaves the recorded frames
/// intact, so the caller can retry with a different path.
#[derive(Debug, Clone, Default)]
pub struct PoseRecorder {
    frames: Vec<RecordedFrame>,
}

impl PoseRecorder {
    /// Create an empty recorder.
    #[must_use]
    pub const fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Record one frame.
    ///
    /// # Arguments
    ///
    /// * `timestamp` - Capture time in seconds.
    /// * `coord_type` - Coordinate space of the set.
    /// * `landmarks` - The landmark set to record (copied).
    pub fn record(&mut self, timestamp: f64, coord_type: CoordType, landmarks: &LandmarkSet) {
        self.frames.push(RecordedFrame {
            frame: self.frames.len(),
            timestamp,
            coord_type,
            landmarks: landmarks.clone(),
        });
    }

    /// Get the number of recorded frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Check if nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Access the recorded frames.
    #[must_use]
    pub fn frames(&self) -> &[RecordedFrame] {
        &self.frames
    }

    /// Discard all recorded frames.
    pub fn clear(&mut self) {
        self.frames.clear();
    }

    /// Write the recording as CSV to any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn write_csv<W: Write>(&self, writer: &mut W) -> Result<()> {
        writeln!(writer, "{CSV_HEADER}")?;
        for frame in &self.frames {
            for (index, slot) in frame.landmarks.iter().enumerate() {
                write_row(writer, frame, index, slot.as_ref())?;
            }
        }
        Ok(())
    }

    /// Save the recording as a CSV file.
    ///
    /// The parent directory is created if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - Output file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory or file cannot be created or the
    /// write fails. The in-memory recording is unaffected either way.
    pub fn save_csv<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                OverlayError::ExportError(format!(
                    "Failed to create directory {}: {e}",
                    parent.display()
                ))
            })?;
        }

        let file = File::create(path)
            .map_err(|e| OverlayError::ExportError(format!("Failed to create {}: {e}", path.display())))?;
        let mut writer = BufWriter::new(file);
        self.write_csv(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

/// Write one landmark row. Absent landmark slots keep the row (so row count
/// stays frames × slots) with empty numeric fields.
fn write_row<W: Write>(
    writer: &mut W,
    frame: &RecordedFrame,
    index: usize,
    landmark: Option<&Landmark>,
) -> Result<()> {
    let name = landmark
        .and_then(|l| l.name.as_deref())
        .or_else(|| skeleton::landmark_name(index))
        .unwrap_or("");

    match landmark {
        Some(l) => writeln!(
            writer,
            "{},{:.3},{},{},{},{:.6},{:.6},{:.6},{},{}",
            frame.frame,
            frame.timestamp,
            frame.coord_type,
            index,
            name,
            l.x,
            l.y,
            l.z,
            fmt_channel(l.visibility),
            fmt_channel(l.presence),
        )?,
        None => writeln!(
            writer,
            "{},{:.3},{},{},{},,,,,",
            frame.frame, frame.timestamp, frame.coord_type, index, name,
        )?,
    }
    Ok(())
}

fn fmt_channel(value: Option<f32>) -> String {
    value.map_or_else(String::new, |v| format!("{v:.3}"))
}

/// Parse a previously exported CSV back into recorded frames.
///
/// Rows are grouped by their `Frame` column; landmark index order within a
/// frame is taken from the `LandmarkIndex` column. Empty numeric fields parse
/// back to absent landmarks/channels.
///
/// # Arguments
///
/// * `path` - Path to a CSV file written by [`PoseRecorder`].
///
/// # Errors
///
/// Returns an error if the file cannot be read, the header does not match,
/// or a row is malformed.
pub fn read_csv<P: AsRef<Path>>(path: P) -> Result<Vec<RecordedFrame>> {
    let path = path.as_ref();
    let file = File::open(path)
        .map_err(|e| OverlayError::ExportError(format!("Failed to open {}: {e}", path.display())))?;
    let reader = BufReader::new(file);
    let mut lines = reader.lines();

    match lines.next() {
        Some(Ok(header)) if header.trim_end() == CSV_HEADER => {}
        Some(Ok(header)) => {
            return Err(OverlayError::ExportError(format!(
                "unexpected CSV header: {header}"
            )));
        }
        Some(Err(e)) => return Err(e.into()),
        None => return Ok(Vec::new()),
    }

    let mut frames: Vec<RecordedFrame> = Vec::new();
    for (line_no, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let row = parse_row(&line)
            .map_err(|e| OverlayError::ExportError(format!("row {}: {e}", line_no + 2)))?;

        if frames.last().is_none_or(|f| f.frame != row.frame) {
            frames.push(RecordedFrame {
                frame: row.frame,
                timestamp: row.timestamp,
                coord_type: row.coord_type,
                landmarks: LandmarkSet::new(),
            });
        }
        if let Some(current) = frames.last_mut() {
            // Rows arrive in landmark-index order; pad any gap with absent slots.
            while current.landmarks.len() < row.index {
                current.landmarks.landmarks.push(None);
            }
            current.landmarks.landmarks.push(row.landmark);
        }
    }

    Ok(frames)
}

struct ParsedRow {
    frame: usize,
    timestamp: f64,
    coord_type: CoordType,
    index: usize,
    landmark: Option<Landmark>,
}

fn parse_row(line: &str) -> Result<ParsedRow> {
    let fields: Vec<&str> = line.split(',').collect();
    if fields.len() != 10 {
        return Err(OverlayError::ExportError(format!(
            "expected 10 fields, found {}",
            fields.len()
        )));
    }

    let frame = fields[0]
        .parse::<usize>()
        .map_err(|e| OverlayError::ExportError(format!("bad frame index: {e}")))?;
    let timestamp = fields[1]
        .parse::<f64>()
        .map_err(|e| OverlayError::ExportError(format!("bad timestamp: {e}")))?;
    let coord_type: CoordType = fields[2].parse()?;
    let index = fields[3]
        .parse::<usize>()
        .map_err(|e| OverlayError::ExportError(format!("bad landmark index: {e}")))?;

    // Empty X marks an absent landmark slot.
    let landmark = if fields[5].is_empty() {
        None
    } else {
        let mut landmark = Landmark::new(
            parse_coord(fields[5])?,
            parse_coord(fields[6])?,
            parse_coord(fields[7])?,
        );
        if !fields[4].is_empty() {
            landmark = landmark.with_name(fields[4]);
        }
        landmark.visibility = parse_channel(fields[8])?;
        landmark.presence = parse_channel(fields[9])?;
        Some(landmark)
    };

    Ok(ParsedRow {
        frame,
        timestamp,
        coord_type,
        index,
        landmark,
    })
}

fn parse_coord(field: &str) -> Result<f32> {
    field
        .parse::<f32>()
        .map_err(|e| OverlayError::ExportError(format!("bad coordinate '{field}': {e}")))
}

fn parse_channel(field: &str) -> Result<Option<f32>> {
    if field.is_empty() {
        return Ok(None);
    }
    Ok(Some(parse_coord(field)?))
}
