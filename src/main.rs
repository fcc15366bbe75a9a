fn main() {
    if let Err(e) = churn_risk_lib::run() {
        tracing::error!("{:#}", e);
        eprintln!("error: {:#}", e);
        std::process::exit(1);
    }
}
