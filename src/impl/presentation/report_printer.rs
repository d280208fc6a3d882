use iso_currency::Currency;

use crate::{
    entities::{ChequeRow, ChequeStatus, LedgerSummary},
    presentation::utils::{format_amount, format_date},
};

const HEADERS: [&str; 8] = [
    "Payer/Payee",
    "Cheque No.",
    "Amount",
    "Date",
    "Status",
    "Alert",
    "Attachment",
    "Action",
];

pub(crate) struct ReportPrinter {
    currency: Currency,
}

impl ReportPrinter {
    pub(crate) fn new(currency: Currency) -> Self {
        Self { currency }
    }

    pub(crate) fn print_dashboard(&self, summary: &LedgerSummary, rows: &[ChequeRow]) -> String {
        let mut output = String::new();

        output.push_str("Dashboard Overview\n");
        output.push_str("==================\n\n");
        self.print_stats(&mut output, summary);
        output.push('\n');

        output.push_str("Cheque Records\n");
        output.push_str("==============\n\n");
        self.print_table(&mut output, rows);

        output
    }

    fn print_stats(&self, output: &mut String, summary: &LedgerSummary) {
        for status in ChequeStatus::ALL {
            let totals = summary.for_status(status);
            output.push_str(&format!(
                "{:<16}{} ({} cheques)\n",
                format!("{} Amount:", status.label()),
                format_amount(totals.total_amount, self.currency),
                totals.count
            ));
        }
        if !summary.frequent_bouncers.is_empty() {
            output.push_str(&format!(
                "\nAttention: Payers with frequent bounced cheques: {}\n",
                summary.frequent_bouncers.join(", ")
            ));
        }
    }

    fn print_table(&self, output: &mut String, rows: &[ChequeRow]) {
        if rows.is_empty() {
            output.push_str("No cheques found for the selected filters.\n");
            return;
        }

        let cells: Vec<[String; 8]> = rows.iter().map(|row| self.cells(row)).collect();
        let widths: Vec<usize> = (0..HEADERS.len())
            .map(|i| {
                cells
                    .iter()
                    .map(|c| c[i].chars().count())
                    .chain(std::iter::once(HEADERS[i].chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let header: Vec<String> = HEADERS.iter().map(|h| h.to_string()).collect();
        push_line(output, &header, &widths);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        push_line(output, &rule, &widths);
        for row in &cells {
            push_line(output, row, &widths);
        }
    }

    fn cells(&self, row: &ChequeRow) -> [String; 8] {
        let cheque = row.cheque;
        let actions = if row.available_statuses.is_empty() {
            "No actions".to_string()
        } else {
            row.available_statuses
                .iter()
                .map(|s| s.label())
                .collect::<Vec<_>>()
                .join("/")
        };
        [
            cheque.name.clone(),
            cheque.cheque_number.clone(),
            format_amount(cheque.amount, self.currency),
            format_date(cheque.date),
            cheque.status.label().to_string(),
            row.due_state.badge().unwrap_or("").to_string(),
            if cheque.image.is_some() { "View" } else { "" }.to_string(),
            actions,
        ]
    }
}

fn push_line(output: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(i, (cell, width))| {
            // Amounts are right-aligned.
            if i == 2 {
                format!("{:>width$}", cell, width = width)
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect::<Vec<_>>()
        .join(" | ");
    output.push_str(line.trim_end());
    output.push('\n');
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::entities::{Cheque, ChequeId, DueState, StatusTotals};

    fn cheque(status: ChequeStatus) -> Cheque {
        Cheque {
            id: ChequeId(1),
            name: "Tech Giants Inc.".to_string(),
            cheque_number: "901234".to_string(),
            amount: 120000.0,
            date: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            status,
            image: None,
        }
    }

    fn summary() -> LedgerSummary {
        LedgerSummary {
            pending: StatusTotals {
                total_amount: 120000.0,
                count: 1,
            },
            cleared: StatusTotals::default(),
            bounced: StatusTotals {
                total_amount: 55000.0,
                count: 2,
            },
            frequent_bouncers: vec!["ABC Corp".to_string()],
        }
    }

    #[test]
    fn dashboard_lists_stats_and_rows() {
        let pending = cheque(ChequeStatus::Pending);
        let rows = vec![ChequeRow {
            cheque: &pending,
            due_state: DueState::DueSoon,
            available_statuses: ChequeStatus::ALL.to_vec(),
        }];

        let report = ReportPrinter::new(Currency::INR).print_dashboard(&summary(), &rows);

        assert!(report.starts_with("Dashboard Overview\n"));
        assert!(report.contains("Pending Amount: ₹1,20,000.00 (1 cheques)"));
        assert!(report.contains("Cleared Amount: ₹0.00 (0 cheques)"));
        assert!(report.contains("Payers with frequent bounced cheques: ABC Corp"));
        let row = report
            .lines()
            .find(|l| l.starts_with("Tech Giants Inc."))
            .unwrap();
        assert!(row.contains("| 901234"));
        assert!(row.contains("| ₹1,20,000.00 |"));
        assert!(row.contains("| 10/6/2024"));
        assert!(row.contains("| Due Soon"));
        assert!(row.ends_with("| Pending/Cleared/Bounced"));
    }

    #[test]
    fn empty_tables_say_so() {
        let report = ReportPrinter::new(Currency::INR).print_dashboard(&summary(), &[]);
        assert!(report.ends_with("Cheque Records\n==============\n\nNo cheques found for the selected filters.\n"));
    }

    #[test]
    fn settled_cheques_offer_no_actions() {
        let cleared = cheque(ChequeStatus::Cleared);
        let rows = vec![ChequeRow {
            cheque: &cleared,
            due_state: DueState::Normal,
            available_statuses: vec![],
        }];

        let report = ReportPrinter::new(Currency::INR).print_dashboard(&summary(), &rows);

        assert!(report.contains("No actions"));
    }
}
