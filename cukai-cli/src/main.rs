use anyhow::bail;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use cukai_core::calculations::audit_exemption::AuditExemption;
use cukai_core::calculations::comparison::{Comparison, ComparisonInput};
use cukai_core::calculations::epf::EpfCalculator;
use cukai_core::models::{AuditExemptionCriteria, ZakatAssessmentInput};
use cukai_core::{CURRENT_TAX_YEAR, available_tax_years, tax_year};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Enterprise vs Sdn Bhd net-cash comparison.
///
/// Computes personal and corporate tax, EPF/SOCSO contributions, the
/// dividend surcharge, and optional zakat treatment for one year of
/// business profit, and prints both structures side by side.
#[derive(Debug, Parser)]
struct Cli {
    /// Annual business profit before owner remuneration, in RM.
    #[arg(long)]
    profit: Decimal,

    /// Annual director salary under the Sdn Bhd structure, in RM.
    /// Defaults to the largest salary the profit can fund through EPF.
    #[arg(long)]
    salary: Option<Decimal>,

    /// Fraction of after-tax profit distributed as dividends (0 to 1).
    #[arg(long, default_value = "1")]
    payout: Decimal,

    /// Total personal reliefs in RM; the basic relief when omitted.
    #[arg(long)]
    reliefs: Option<Decimal>,

    /// Include zakat (gross-income method) in both structures.
    #[arg(long, default_value_t = false)]
    zakat: bool,

    /// Year of Assessment to price against.
    #[arg(long, default_value = CURRENT_TAX_YEAR)]
    year: String,
}

// ─── tracing ─────────────────────────────────────────────────────────────────

/// Initialise the tracing subscriber.
///
/// * Honours `RUST_LOG` when set.
/// * Falls back to `info` so normal runs are quiet.
/// * Strips timestamps and target names to keep CLI output clean.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::from("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .without_time()
        .with_target(false)
        .init();
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();

    let Some(config) = tax_year(&cli.year) else {
        bail!(
            "unknown tax year {:?}; available: {}",
            cli.year,
            available_tax_years().join(", ")
        );
    };

    let salary = cli.salary.unwrap_or_else(|| {
        let affordable = EpfCalculator::new(&config.epf).max_affordable_salary(cli.profit);
        debug!(%affordable, "no salary given, using max affordable");
        affordable
    });

    let input = ComparisonInput {
        business_profit: cli.profit,
        annual_salary: salary,
        dividend_payout_ratio: cli.payout,
        total_reliefs: cli.reliefs,
        zakat: ZakatAssessmentInput {
            enabled: cli.zakat,
            ..Default::default()
        },
    };

    let result = Comparison::new(config).compare(&input);

    println!("Year of Assessment: {}", config.year_assessment);
    println!();
    println!("Enterprise (sole proprietorship)");
    println!("  chargeable income    RM {:>14}", result.enterprise.taxable_income);
    println!("  personal tax         RM {:>14}", result.enterprise.tax_payable);
    if cli.zakat {
        println!("  zakat paid           RM {:>14}", result.enterprise.zakat_paid);
        println!("  zakat rebate         RM {:>14}", result.enterprise.zakat.net_tax_impact);
    }
    println!("  net cash             RM {:>14}", result.enterprise.net_cash);
    println!();

    let company = &result.sdn_bhd;
    println!("Sdn Bhd (salary RM {salary}, payout {})", input.dividend_payout_ratio);
    println!("  employer EPF         RM {:>14}", company.employer_epf);
    println!("  employer SOCSO       RM {:>14}", company.employer_socso);
    println!("  chargeable profit    RM {:>14}", company.corporate_taxable_profit);
    if cli.zakat {
        println!("  zakat paid           RM {:>14}", company.zakat_paid);
        println!("  zakat deduction      RM {:>14}", company.zakat.net_tax_impact);
    }
    println!("  corporate tax        RM {:>14}", company.corporate_tax);
    println!("  dividends            RM {:>14}", company.dividends);
    println!("  dividend surcharge   RM {:>14}", company.dividend_surcharge);
    println!("  personal tax         RM {:>14}", company.personal_tax_on_salary);
    println!("  employee EPF         RM {:>14}", company.employee_epf);
    println!("  employee SOCSO       RM {:>14}", company.employee_socso);
    println!("  net cash             RM {:>14}", company.net_cash);
    println!();

    let audit = AuditExemption::new(&config.audit_exemption);
    let exempt = audit.is_exempt(&AuditExemptionCriteria {
        revenue: cli.profit,
        total_assets: cli.profit,
        employees: 1,
    });
    println!(
        "Audit: {} (single-employee company at this revenue)",
        if exempt { "exempt" } else { "required" }
    );
    println!();

    if result.advantage > Decimal::ZERO {
        println!("Sdn Bhd ahead by RM {}", result.advantage);
    } else if result.advantage < Decimal::ZERO {
        println!("Enterprise ahead by RM {}", -result.advantage);
    } else {
        println!("Both structures net the same cash");
    }

    Ok(())
}
