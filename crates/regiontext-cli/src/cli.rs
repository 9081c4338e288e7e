use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use regiontext_core::{Tolerance, UnicodeNorm, UserRegion};

use crate::regions::{parse_region_arg, parse_tolerance};

/// Extract the text under target regions and link annotations of laid-out pages.
#[derive(Debug, Parser)]
#[command(name = "regiontext", about, version)]
pub struct Cli {
    /// Log extraction details to stderr
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Extract text inside user regions and link rectangles
    Extract {
        /// Path to the page-words JSON document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Target region as 'left,bottom,right,top[:description]' (repeatable)
        #[arg(long = "region", value_name = "REGION", value_parser = parse_region_arg)]
        regions: Vec<UserRegion>,

        /// JSON file with a list of target regions
        #[arg(long, value_name = "FILE")]
        regions_file: Option<PathBuf>,

        /// Tolerance for --region regions, as 'horizontal,vertical' (default: 0,0)
        #[arg(long, value_name = "H,V", value_parser = parse_tolerance)]
        tolerance: Option<Tolerance>,

        /// Tolerance for link regions, as 'horizontal,vertical' (default: 4,2)
        #[arg(long, value_name = "H,V", value_parser = parse_tolerance)]
        link_tolerance: Option<Tolerance>,

        /// Apply Unicode normalization to extracted text
        #[arg(long, value_enum)]
        unicode_norm: Option<UnicodeNormArg>,

        /// Evaluate each page's regions in parallel
        #[arg(long)]
        parallel: bool,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,

        /// Write the report to this file instead of stdout
        #[arg(long, short, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// List the link regions of each page
    Links {
        /// Path to the page-words JSON document
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Page range (e.g. '1,3-5'). Default: all pages
        #[arg(long)]
        pages: Option<String>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format for the report.
#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    /// One line per region
    Text,
    /// JSON output
    Json,
    /// CSV output
    Csv,
}

/// Unicode normalization form for CLI arguments.
#[derive(Debug, Clone, ValueEnum)]
pub enum UnicodeNormArg {
    /// Canonical Decomposition, followed by Canonical Composition
    Nfc,
    /// Canonical Decomposition
    Nfd,
    /// Compatibility Decomposition, followed by Canonical Composition
    Nfkc,
    /// Compatibility Decomposition
    Nfkd,
}

impl UnicodeNormArg {
    /// Convert to the core library's `UnicodeNorm` enum.
    pub fn to_unicode_norm(&self) -> UnicodeNorm {
        match self {
            UnicodeNormArg::Nfc => UnicodeNorm::Nfc,
            UnicodeNormArg::Nfd => UnicodeNorm::Nfd,
            UnicodeNormArg::Nfkc => UnicodeNorm::Nfkc,
            UnicodeNormArg::Nfkd => UnicodeNorm::Nfkd,
        }
    }
}
