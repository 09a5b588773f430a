//! Capital Calc CLI
//!
//! ```bash
//! capital_calc compound --initial 1000 --contribution 100 --rate 12 --period yearly --years 10
//! capital_calc loan --amount 10000 --rate 1 --months 12 --system price --csv loan.csv
//! capital_calc compare --file investments.csv --years 20 --json
//! capital_calc growth --investment "Fund,5000,0.8" --investment "CD,5000,0.9" --months 36
//! capital_calc run request.json
//! ```
//!
//! Table precision and defaults come from `CAPITAL_CALC_*` environment variables.

use anyhow::{Context, Result};
use capital_calc::comparison::{
    compare_investments, default_investments, load_investments, ComparisonSeries, FixedReturnInvestment,
};
use capital_calc::config::Settings;
use capital_calc::request::{
    CalculationRequest, CompoundInterestRequest, InflationRequest, InvestmentReturnRequest, LoanRequest, PeriodUnit,
    RateConversionRequest, RealReturnRequest, SimpleInterestRequest,
};
use capital_calc::{AmortizationSystem, ConversionMethod, RatePeriod};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Capital Calc - investment and credit calculations
#[derive(Parser)]
#[command(name = "capital_calc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Print the full result as JSON instead of a table
    #[arg(long, global = true)]
    json: bool,

    /// Also write the period-by-period rows to this CSV file
    #[arg(long, global = true, value_name = "PATH")]
    csv: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compound interest with monthly contributions
    Compound(CompoundArgs),

    /// Simple interest
    Simple(SimpleArgs),

    /// Show a rate on daily, monthly and yearly bases
    Convert(ConvertArgs),

    /// Loan amortization schedule (SAC or Price)
    Loan(LoanArgs),

    /// Inflation adjustment and purchasing-power erosion
    Inflation(InflationArgs),

    /// Nominal vs. inflation-adjusted investment growth
    RealReturn(RealReturnArgs),

    /// Compare investment options side by side
    Compare(CompareArgs),

    /// Month-by-month growth of lump sums at fixed monthly returns
    Growth(GrowthArgs),

    /// Run a JSON calculation request file
    Run(RunArgs),
}

#[derive(Args)]
struct CompoundArgs {
    #[arg(long, default_value_t = 1000.0)]
    initial: f64,

    #[arg(long, default_value_t = 100.0)]
    contribution: f64,

    /// Rate in percent on the basis given by --period
    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    #[arg(long, default_value = "yearly")]
    period: RatePeriod,

    /// Yearly to monthly method (defaults to CAPITAL_CALC_CONVERSION)
    #[arg(long)]
    conversion: Option<ConversionMethod>,

    #[arg(long, default_value_t = 10)]
    duration: u32,

    #[arg(long, default_value = "years")]
    unit: PeriodUnit,
}

#[derive(Args)]
struct SimpleArgs {
    #[arg(long, default_value_t = 1000.0)]
    principal: f64,

    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    #[arg(long, default_value = "monthly")]
    period: RatePeriod,

    #[arg(long, default_value_t = 12.0)]
    duration: f64,

    #[arg(long, default_value = "months")]
    unit: PeriodUnit,
}

#[derive(Args)]
struct ConvertArgs {
    rate: f64,

    #[arg(long, default_value = "monthly")]
    from: RatePeriod,
}

#[derive(Args)]
struct LoanArgs {
    #[arg(long, default_value_t = 100_000.0)]
    amount: f64,

    #[arg(long, default_value_t = 1.0)]
    rate: f64,

    #[arg(long, default_value = "monthly")]
    period: RatePeriod,

    #[arg(long)]
    conversion: Option<ConversionMethod>,

    /// Term in months
    #[arg(long, default_value_t = 120)]
    months: u32,

    #[arg(long, default_value = "price")]
    system: AmortizationSystem,
}

#[derive(Args)]
struct InflationArgs {
    #[arg(long, default_value_t = 1000.0)]
    value: f64,

    /// Annual inflation in percent
    #[arg(long, default_value_t = 4.5)]
    inflation: f64,

    #[arg(long, default_value_t = 10)]
    years: u32,
}

#[derive(Args)]
struct RealReturnArgs {
    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    #[arg(long, default_value_t = 500.0)]
    contribution: f64,

    /// Annual nominal return in percent
    #[arg(long, default_value_t = 12.0)]
    nominal: f64,

    /// Annual inflation in percent
    #[arg(long, default_value_t = 4.5)]
    inflation: f64,

    #[arg(long, default_value_t = 10)]
    years: u32,
}

#[derive(Args)]
struct CompareArgs {
    /// CSV with columns name,rate,rate_period,conversion_method
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    #[arg(long, default_value_t = 10_000.0)]
    initial: f64,

    #[arg(long, default_value_t = 500.0)]
    contribution: f64,

    #[arg(long, default_value_t = 10)]
    years: u32,
}

#[derive(Args)]
struct GrowthArgs {
    /// Investment as NAME,INITIAL_VALUE,MONTHLY_RETURN_PCT (repeatable)
    #[arg(long = "investment", value_name = "SPEC", value_parser = parse_fixed_return)]
    investments: Vec<FixedReturnInvestment>,

    #[arg(long, default_value_t = 24)]
    months: u32,
}

#[derive(Args)]
struct RunArgs {
    /// JSON request, tagged by "calculation"
    request: PathBuf,
}

/// One point of a comparison, flattened for CSV output
#[derive(Serialize)]
struct ComparisonRow<'a> {
    name: &'a str,
    year: usize,
    value: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let settings = Settings::from_env();
    let start = Instant::now();

    match cli.command {
        Commands::Compound(args) => compound(args, &cli.csv, cli.json, &settings)?,
        Commands::Simple(args) => simple(args, cli.json, &settings)?,
        Commands::Convert(args) => convert(args, cli.json)?,
        Commands::Loan(args) => loan(args, &cli.csv, cli.json, &settings)?,
        Commands::Inflation(args) => inflation(args, &cli.csv, cli.json, &settings)?,
        Commands::RealReturn(args) => real_return(args, &cli.csv, cli.json, &settings)?,
        Commands::Compare(args) => compare(args, &cli.csv, cli.json, &settings)?,
        Commands::Growth(args) => growth(args, &cli.csv, cli.json, &settings)?,
        Commands::Run(args) => run_request(args)?,
    }

    log::info!("Finished in {:?}", start.elapsed());
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn write_csv<T: Serialize>(path: &Path, rows: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path).with_context(|| format!("creating {}", path.display()))?;
    for row in rows {
        writer.serialize(row)?;
    }
    writer.flush()?;
    println!("\nFull results written to: {}", path.display());
    Ok(())
}

fn compound(args: CompoundArgs, csv: &Option<PathBuf>, json: bool, settings: &Settings) -> Result<()> {
    let request = CompoundInterestRequest {
        initial_capital: args.initial,
        monthly_contribution: args.contribution,
        interest_rate: args.rate,
        rate_period: args.period,
        conversion_method: args.conversion.unwrap_or(settings.conversion),
        period: args.duration,
        period_unit: args.unit,
    };
    let result = request.run()?;

    if json {
        print_json(&result)?;
    } else {
        let m = |v: f64| settings.money(v);
        println!("Compound Interest ({} months at {:.4}% per month)", request.total_months()?, request.monthly_rate());
        println!("{:>6} {:>16} {:>16} {:>16}", "Month", "Balance", "Contributed", "Interest");
        println!("{}", "-".repeat(57));

        let rows = if settings.full_table { result.timeline.clone() } else { result.yearly() };
        for row in &rows {
            println!(
                "{:>6} {:>16} {:>16} {:>16}",
                row.period,
                m(row.balance),
                m(row.total_contributions),
                m(row.total_interest)
            );
        }

        println!("\nSummary:");
        println!("  Final Balance:       {}", m(result.final_balance));
        println!("  Total Contributions: {}", m(result.total_contributions));
        println!("  Total Interest:      {}", m(result.total_interest));
        println!("  Interest Share:      {:.2}%", result.interest_share());
    }

    if let Some(path) = csv {
        write_csv(path, &result.timeline)?;
    }
    Ok(())
}

fn simple(args: SimpleArgs, json: bool, settings: &Settings) -> Result<()> {
    let request = SimpleInterestRequest {
        principal: args.principal,
        interest_rate: args.rate,
        rate_period: args.period,
        period: args.duration,
        period_unit: args.unit,
    };
    let result = request.run();

    if json {
        return print_json(&result);
    }
    println!("Simple Interest ({} months at {}% per month)", request.months(), request.monthly_rate());
    println!("  Interest: {}", settings.money(result.interest));
    println!("  Amount:   {}", settings.money(result.amount));
    Ok(())
}

fn convert(args: ConvertArgs, json: bool) -> Result<()> {
    let table = RateConversionRequest {
        interest_rate: args.rate,
        from: args.from,
    }
    .run();

    if json {
        return print_json(&table);
    }
    println!("{}% {} is equivalent to:", args.rate, args.from);
    for period in RatePeriod::ALL {
        println!("  {:<8} {:.6}%", period.as_str(), table.get(period));
    }
    Ok(())
}

fn loan(args: LoanArgs, csv: &Option<PathBuf>, json: bool, settings: &Settings) -> Result<()> {
    let request = LoanRequest {
        loan_amount: args.amount,
        interest_rate: args.rate,
        rate_period: args.period,
        conversion_method: args.conversion.unwrap_or(settings.conversion),
        loan_term: args.months,
        system: args.system,
    };
    let schedule = request.run()?;

    if json {
        print_json(&schedule)?;
    } else {
        let m = |v: f64| settings.money(v);
        println!(
            "{} Amortization ({} months at {:.4}% per month)",
            schedule.system.as_str().to_uppercase(),
            schedule.months(),
            request.monthly_rate()
        );
        println!("{:>6} {:>14} {:>14} {:>14} {:>16}", "Month", "Payment", "Interest", "Principal", "Balance");
        println!("{}", "-".repeat(68));

        let rows = if settings.full_table { schedule.payments.clone() } else { schedule.sampled() };
        for row in &rows {
            println!(
                "{:>6} {:>14} {:>14} {:>14} {:>16}",
                row.period,
                m(row.payment_amount),
                m(row.interest_portion),
                m(row.amortization_portion),
                m(row.remaining_balance)
            );
        }

        println!("\nSummary:");
        if let Some(fixed) = schedule.fixed_payment {
            println!("  Fixed Installment: {}", m(fixed));
        }
        if let (Some(first), Some(last)) = (schedule.first_payment(), schedule.last_payment()) {
            println!("  First Payment:     {}", m(first.payment_amount));
            println!("  Last Payment:      {}", m(last.payment_amount));
        }
        println!("  Total Paid:        {}", m(schedule.total_paid));
        println!("  Total Interest:    {}", m(schedule.total_interest));
    }

    if let Some(path) = csv {
        write_csv(path, &schedule.payments)?;
    }
    Ok(())
}

fn inflation(args: InflationArgs, csv: &Option<PathBuf>, json: bool, settings: &Settings) -> Result<()> {
    let output = InflationRequest {
        current_value: args.value,
        inflation_rate: args.inflation,
        years: args.years,
    }
    .run();

    if json {
        print_json(&output)?;
    } else {
        let m = |v: f64| settings.money(v);
        println!("Inflation at {}% per year over {} years", args.inflation, args.years);
        println!("  Needed then for today's {}: {}", m(args.value), m(output.future_value));
        println!("  {} then is worth today:    {}", m(args.value), m(output.present_value));
        println!("  Purchasing power kept:      {:.2}%", output.purchasing_power);

        println!("\n{:>5} {:>14} {:>14} {:>8}", "Year", "Nominal", "Real", "Loss %");
        println!("{}", "-".repeat(44));
        for row in &output.schedule {
            println!(
                "{:>5} {:>14} {:>14} {:>8.2}",
                row.year,
                m(row.nominal_value),
                m(row.real_value),
                row.loss_percent
            );
        }
    }

    if let Some(path) = csv {
        write_csv(path, &output.schedule)?;
    }
    Ok(())
}

fn real_return(args: RealReturnArgs, csv: &Option<PathBuf>, json: bool, settings: &Settings) -> Result<()> {
    let result = RealReturnRequest {
        initial_amount: args.initial,
        monthly_contribution: args.contribution,
        nominal_return: args.nominal,
        inflation_rate: args.inflation,
        years: args.years,
    }
    .run()?;

    if json {
        print_json(&result)?;
    } else {
        let m = |v: f64| settings.money(v);
        println!("Real Return ({}% nominal, {}% inflation)", args.nominal, args.inflation);
        println!("{:>5} {:>16} {:>16} {:>16}", "Year", "Nominal", "Real", "Inflation Loss");
        println!("{}", "-".repeat(56));
        for row in &result.entries {
            println!(
                "{:>5} {:>16} {:>16} {:>16}",
                row.year,
                m(row.nominal_value),
                m(row.real_value),
                m(row.inflation_impact)
            );
        }

        println!("\nSummary:");
        println!("  Total Contributions: {}", m(result.total_contributions));
        println!("  Nominal Return:      {}", m(result.total_nominal_return));
        println!("  Real Return:         {}", m(result.total_real_return));
        println!("  Inflation Impact:    {}", m(result.total_inflation_impact));
    }

    if let Some(path) = csv {
        write_csv(path, &result.entries)?;
    }
    Ok(())
}

fn compare(args: CompareArgs, csv: &Option<PathBuf>, json: bool, settings: &Settings) -> Result<()> {
    let investments = match &args.file {
        Some(path) => load_investments(path).with_context(|| format!("loading {}", path.display()))?,
        None => default_investments(),
    };
    let series = compare_investments(&investments, args.initial, args.contribution, args.years)?;

    if json {
        print_json(&series)?;
    } else {
        print_comparison(&series, settings);
    }

    if let Some(path) = csv {
        let rows: Vec<ComparisonRow> = series
            .iter()
            .flat_map(|s| {
                s.yearly_values.iter().enumerate().map(move |(year, &value)| ComparisonRow {
                    name: &s.name,
                    year,
                    value,
                })
            })
            .collect();
        write_csv(path, &rows)?;
    }
    Ok(())
}

fn print_comparison(series: &[ComparisonSeries], settings: &Settings) {
    println!("{:<28} {:>10} {:>18}", "Investment", "Monthly %", "Final Value");
    println!("{}", "-".repeat(58));
    for s in series {
        println!("{:<28} {:>10.4} {:>18}", s.name, s.monthly_rate, settings.money(s.final_value()));
    }
}

fn parse_fixed_return(s: &str) -> std::result::Result<FixedReturnInvestment, String> {
    let parts: Vec<&str> = s.split(',').map(str::trim).collect();
    let [name, initial, monthly] = parts.as_slice() else {
        return Err(format!("expected NAME,INITIAL_VALUE,MONTHLY_RETURN_PCT, got '{}'", s));
    };
    let initial_value: f64 = initial.parse().map_err(|_| format!("invalid initial value '{}'", initial))?;
    let monthly_return: f64 = monthly.parse().map_err(|_| format!("invalid monthly return '{}'", monthly))?;
    Ok(FixedReturnInvestment::new(*name, initial_value, monthly_return))
}

/// One point of a growth curve, flattened for CSV output
#[derive(Serialize)]
struct GrowthRow<'a> {
    name: &'a str,
    month: usize,
    value: f64,
}

fn growth(args: GrowthArgs, csv: &Option<PathBuf>, json: bool, settings: &Settings) -> Result<()> {
    let mut request = InvestmentReturnRequest {
        months: args.months,
        ..Default::default()
    };
    if !args.investments.is_empty() {
        request.investments = args.investments;
    }
    let output = request.run()?;

    if json {
        print_json(&output)?;
    } else {
        let m = |v: f64| settings.money(v);
        println!("Investment Return ({} months)", output.months);
        println!("{:<28} {:>10} {:>16} {:>16}", "Investment", "Monthly %", "Final Value", "Return");
        println!("{}", "-".repeat(73));
        for curve in &output.curves {
            println!(
                "{:<28} {:>10.4} {:>16} {:>16}",
                curve.name,
                curve.monthly_return,
                m(curve.final_value()),
                m(curve.total_return())
            );
        }
    }

    if let Some(path) = csv {
        let rows: Vec<GrowthRow> = output
            .curves
            .iter()
            .flat_map(|c| {
                c.values.iter().enumerate().map(move |(month, &value)| GrowthRow {
                    name: &c.name,
                    month,
                    value,
                })
            })
            .collect();
        write_csv(path, &rows)?;
    }
    Ok(())
}

fn run_request(args: RunArgs) -> Result<()> {
    let text = fs::read_to_string(&args.request).with_context(|| format!("reading {}", args.request.display()))?;
    let request = CalculationRequest::from_json(&text)?;
    log::info!("Running request from {}", args.request.display());
    print_json(&request.run()?)
}
