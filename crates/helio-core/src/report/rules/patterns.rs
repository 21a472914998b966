//! Regex patterns for HelioScope summary report extraction.
//!
//! The report text is flattened from the PDF, so table cells arrive as runs of
//! whitespace-separated tokens. Each pattern below recovers one field or one
//! table row from that layout.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Project metadata
    pub static ref PROJECT_NAME: Regex = Regex::new(
        r"Project Name\s+(.*)"
    ).unwrap();

    pub static ref PROJECT_ADDRESS: Regex = Regex::new(
        r"(?s)Project\s+Address\s+(.*?)\s+USA"
    ).unwrap();

    pub static ref ANNUAL_PRODUCTION: Regex = Regex::new(
        r"Annual\s+Production\s+([\d.]+)\s+MWh"
    ).unwrap();

    pub static ref PERFORMANCE_RATIO: Regex = Regex::new(
        r"Performance\s+Ratio\s+([\d.]+)%"
    ).unwrap();

    pub static ref WEATHER_DATASET: Regex = Regex::new(
        r"(?s)Weather Dataset\s+(.+?)\s+Simulator Version"
    ).unwrap();

    // Components table: label, description, count, (value unit)
    pub static ref COMPONENT_ROW: Regex = Regex::new(
        r"(Inverters|Strings[^\n]*?|Module)\s+([A-Za-z0-9\-/,().\s]+?)\s+(\d+)\s+\(([\d.,]+)\s*(kW|ft)\)"
    ).unwrap();

    // Sources of system loss ("Shading: 3.4%")
    pub static ref LOSS_ENTRY: Regex = Regex::new(
        r"(\w+)\s*:\s*([\d.]+)%"
    ).unwrap();

    // Monthly production: month, GHI, POA, shaded, nameplate, grid
    pub static ref MONTH_ROW: Regex = Regex::new(
        r"(\b(?:January|February|March|April|May|June|July|August|September|October|November|December)\b)\s+([\d.]+)\s+([\d.]+)\s+([\d.]+)\s+([\d.,]+)\s+([\d.,]+)"
    ).unwrap();

    // Field segment header, racking line with tilt/azimuth, then layout numbers
    pub static ref FIELD_SEGMENT: Regex = Regex::new(
        r"(?s)Field\s+Segment\s+\d+\s+.*?\nFixed\s+Tilt.*?Module:\s+(\d+)°.*?Module:\s+(\d+)°.*?\n.*?(\d+\.\d+)\s*ft\s+(\d+x\d+)\s+(\d+)\s+(\d+)\s+([\d.]+)\s+kW"
    ).unwrap();

    // Numeric helpers
    pub static ref FRAME_SIZE: Regex = Regex::new(
        r"^\s*(\d+)\s*[xX×]\s*(\d+)\s*$"
    ).unwrap();
}
