use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use film_reports_db::REPORTS;

/// List every report with its parameters, result columns, and row order.
pub(crate) fn run_reports() {
    log::info!("{}", "Reports".if_supports_color(Stdout, |t| t.bold()));
    crate::log_blank();

    for report in REPORTS {
        let params: Vec<String> = report
            .params
            .iter()
            .map(|p| format!("{}: {}", p.name, p.kind.label()))
            .collect();
        let status = if report.is_implemented() {
            String::new()
        } else {
            format!(" {}", "(not implemented)".if_supports_color(Stdout, |t| t.yellow()))
        };

        log::info!(
            "  {}({}){}",
            report.name.if_supports_color(Stdout, |t| t.cyan()),
            params.join(", "),
            status,
        );
        log::info!("    {}", report.description);
        log::info!(
            "    {}",
            format!("columns: {}", report.columns.join(", "))
                .if_supports_color(Stdout, |t| t.dimmed()),
        );
        if !report.order_by.is_empty() {
            log::info!(
                "    {}",
                format!("ordered by: {}", report.order_by.join(", "))
                    .if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}
