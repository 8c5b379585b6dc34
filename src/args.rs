use clap::Parser;

/// Compares three rankings of the same medal table: majority judgment,
/// lexicographic (gold > silver > bronze) and total medal count.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON run configuration: grade labels, medal
    /// cutoff, output settings and file sources. Command-line flags override
    /// the corresponding configuration entries.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) The medal table to rank. The format is given by --input-type.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (default csv) The input format: 'feed' for a saved Olympic medal feed in
    /// JSON, 'csv' for a Country,Gold,Silver,Bronze,Total table, 'xlsx' for the
    /// same table in an Excel workbook.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (file path, 'stdout' or empty) Where to write the summary JSON with the
    /// comparison table and the merit-profile ballots.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) A reference summary in JSON format. If provided, medaljudge
    /// checks that the computed summary matches the reference.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// (directory path) If specified, the raw medal table is snapshotted there
    /// as a timestamped CSV file before ranking.
    #[clap(long, value_parser)]
    pub snapshot_dir: Option<String>,

    /// Overrides the minimum medal total a country needs to be ranked.
    #[clap(long, value_parser)]
    pub min_medals: Option<u64>,

    /// When using an Excel file, the name of the worksheet to read. Defaults to
    /// the first worksheet.
    #[clap(long, value_parser)]
    pub excel_worksheet_name: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
