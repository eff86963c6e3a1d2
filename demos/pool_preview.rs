//! Interactive-style preview of a constant-product pool.
//!
//! Walks a session through a trade preview, a rejected and an accepted
//! deposit, and a commit, printing what a UI would render.
//!
//! # Run
//!
//! ```bash
//! RUST_LOG=hydra_sim=debug cargo run --example pool_preview
//! ```

use hydra_sim::config::SimConfig;
use hydra_sim::domain::{Direction, Side};
use hydra_sim::session::{DerivedView, Session};
use tracing_subscriber::EnvFilter;

fn print_view(view: &DerivedView) {
    let current = view.current_pool();
    let simulated = view.simulated_pool();
    println!("  Current:     {current:.4}");
    println!("  Simulated:   {simulated:.4}");
    match view.trade_quote() {
        Some(q) => {
            println!("  Amount out:  {:.6}", q.amount_out());
            println!("  Fee:         {:.6}", q.fee());
            println!("  Total paid:  {:.6}", q.total_input_with_fee());
            if let Some(impact) = q.price_impact_percent() {
                println!("  Impact:      {impact:.4}%");
            }
        }
        None => println!("  Amount out:  -"),
    }
    if let Some(reason) = view.liquidity().and_then(|d| d.reject_reason()) {
        println!("  Deposit:     rejected ({reason})");
    }
    let (share_a, share_b) = view.simulated_composition();
    println!(
        "  Composition: {:.1}% / {:.1}%",
        share_a * 100.0,
        share_b * 100.0
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "hydra_sim=info".into()),
        )
        .init();

    println!("=== Constant Product Pool Preview ===\n");

    // ── 1. Reference session: 500 PST / 1000 HKD, 0.30% fee ─────────────
    let mut session = Session::new(&SimConfig::default())?;
    println!("Pair:        {}", session.pair());
    println!("Pool:        {}", session.current_pool());
    println!("LP supply:   {:.4}", session.lp_supply());
    println!("Spot price:  {:.4} HKD per PST", session.current_pool().price()?);

    // ── 2. Preview selling 100 HKD ──────────────────────────────────────
    session.set_trade_amount("100");
    println!("\n--- Preview: {} 100 ---", session.trade_label());
    print_view(&session.recompute());

    // ── 3. A deposit at the pre-trade ratio no longer fits ──────────────
    session.set_liquidity("50", "100");
    println!("\n--- Preview: trade + deposit 50 PST / 100 HKD ---");
    print_view(&session.recompute());

    // ── 4. Commit the trade alone ───────────────────────────────────────
    session.set_liquidity("", "");
    let pool = session.commit();
    println!("\nCommitted:   {pool:.4}");

    // ── 5. Slippage curve in the other direction ────────────────────────
    session.set_trade_direction(Direction::AToB);
    let view = session.recompute();
    println!("\n--- Curve: {} ---", session.trade_label());
    for sample in view.curve().iter().step_by(20) {
        println!("  {:>8.1} → {:>10.4}", sample.input, sample.output);
    }

    // ── 6. Edit a reserve directly ──────────────────────────────────────
    let accepted = session.set_reserve(Side::A, "abc");
    println!("\nSet reserve A to \"abc\": accepted = {accepted}");
    let accepted = session.set_reserve(Side::A, "600");
    println!("Set reserve A to 600:   accepted = {accepted}");
    println!("Pool:        {}", session.current_pool());

    Ok(())
}
