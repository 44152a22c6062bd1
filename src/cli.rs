use std::path::PathBuf;

use clap::Parser;

use crate::report::BucketMode;

#[derive(Debug, Parser)]
#[command(name = "bolsillo")]
#[command(about = "Plain-text monthly budget reports", long_about = None)]
pub struct Cli {
    /// Budget data directory holding YYYYMM.txt ledgers and an optional tags.txt.
    #[arg(short = 'd', long = "dir", env = "BOLSILLO_DIR", default_value = "budget")]
    pub dir: PathBuf,

    /// Month to report (YYYYMM). Defaults to the current month.
    #[arg(short = 'm', long = "month")]
    pub month: Option<String>,

    /// Inclusive month range to combine (YYYYMM-YYYYMM).
    #[arg(short = 'r', long = "range", conflicts_with = "month")]
    pub range: Option<String>,

    /// Bucket costs by tag when the name has one.
    #[arg(short = 's', long = "short")]
    pub short: bool,

    /// Only report costs resolved to this tag.
    #[arg(short = 't', long = "tag")]
    pub tag: Option<String>,
}

impl Cli {
    /// Resolves the bucket mode once, up front: an explicit tag filter wins
    /// over short mode, which wins over plain names.
    pub fn bucket_mode(&self) -> BucketMode {
        if let Some(tag) = &self.tag {
            BucketMode::FilterTag(tag.clone())
        } else if self.short {
            BucketMode::Tagged
        } else {
            BucketMode::Plain
        }
    }
}
