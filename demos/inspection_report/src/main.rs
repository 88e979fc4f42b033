use std::error::Error;

use aliasauto_catalog::InspectionReport;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let report = InspectionReport::fetch("INS-2024-0042").await?;
    println!("Report: {}", report.inspection_id);
    println!("Inspector: {}", report.inspector_name);
    if let Some(date) = report.inspection_date() {
        println!("Date: {date}");
    }
    println!("{}", report.description_text());
    Ok(())
}
