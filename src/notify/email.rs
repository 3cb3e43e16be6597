use chrono::NaiveDate;

use crate::domain::order::OrderRecord;

// ============================================================================
// Email Rendering - Order Notification Bodies
// ============================================================================
//
// Pure formatting: an OrderRecord in, subject + HTML + plain-text out.
// The plain-text body exists for clients that don't render HTML.
//
// ============================================================================

const STYLE: &str = "\
body { font-family: Arial, sans-serif; line-height: 1.6; color: #333; }
.container { max-width: 600px; margin: 0 auto; padding: 20px; }
.header { background-color: #f8f9fa; padding: 20px; border-radius: 5px; margin-bottom: 20px; }
.details { background-color: #ffffff; padding: 20px; border: 1px solid #dee2e6; border-radius: 5px; }
.section { margin-bottom: 20px; }
.section-title { font-weight: bold; color: #0066cc; margin-bottom: 10px; }
.footer { margin-top: 20px; padding-top: 20px; border-top: 1px solid #dee2e6; font-size: 0.9em; color: #666; }
table { width: 100%; border-collapse: collapse; }
td { padding: 8px; border-bottom: 1px solid #dee2e6; }
td:first-child { font-weight: bold; width: 40%; }";

pub fn subject(order: &OrderRecord) -> String {
    format!("Custom Crate Order - {}", order.business_name)
}

/// Long-form date shown in the notification, e.g. "Friday, March 14, 2025".
pub fn format_required_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

pub fn render_html(order: &OrderRecord) -> String {
    let dims = &order.dimensions;
    format!(
        r#"<!DOCTYPE html>
<html>
  <head>
    <style>
{style}
    </style>
  </head>
  <body>
    <div class="container">
      <div class="header">
        <h2>Custom Crate Order Details</h2>
        <p>Thank you for using our Wooden Crate Visualizer.</p>
      </div>

      <div class="details">
        <div class="section">
          <div class="section-title">Customer Information</div>
          <table>
            <tr><td>Your Name:</td><td>{name}</td></tr>
            <tr><td>Business Name:</td><td>{business}</td></tr>
            <tr><td>Address of Delivery:</td><td>{address}</td></tr>
          </table>
        </div>

        <div class="section">
          <div class="section-title">Crate Specifications</div>
          <table>
            <tr><td>Dimensions:</td><td>{width}mm &times; {height}mm &times; {depth}mm</td></tr>
            <tr><td>Quantity:</td><td>{quantity} crate(s)</td></tr>
            <tr><td>Weight Rating:</td><td>{weight} kg</td></tr>
            <tr><td>Total Weight:</td><td>{total:.2} kg</td></tr>
            <tr><td>Date Required:</td><td>{date}</td></tr>
          </table>
        </div>
      </div>

      <div class="footer">
        <p>This is an automated email. Please do not reply to this message.</p>
        <p>If you have any questions, please contact our customer service team.</p>
      </div>
    </div>
  </body>
</html>
"#,
        style = STYLE,
        name = escape(&order.name),
        business = escape(&order.business_name),
        address = escape(&order.delivery_address),
        width = dims.width,
        height = dims.height,
        depth = dims.depth,
        quantity = order.quantity,
        weight = order.weight,
        total = order.total_weight(),
        date = format_required_date(order.date_required),
    )
}

pub fn render_text(order: &OrderRecord) -> String {
    let dims = &order.dimensions;
    format!(
        "Custom Crate Order Details\n\
         \n\
         Customer Information:\n\
         - Your Name: {name}\n\
         - Business Name: {business}\n\
         - Address of Delivery: {address}\n\
         \n\
         Crate Specifications:\n\
         - Dimensions: {width}mm x {height}mm x {depth}mm\n\
         - Quantity: {quantity} crate(s)\n\
         - Weight Rating: {weight} kg\n\
         - Total Weight: {total:.2} kg\n\
         - Date Required: {date}\n\
         \n\
         This is an automated email. Please do not reply to this message.\n\
         If you have any questions, please contact our customer service team.\n",
        name = order.name,
        business = order.business_name,
        address = order.delivery_address,
        width = dims.width,
        height = dims.height,
        depth = dims.depth,
        quantity = order.quantity,
        weight = order.weight,
        total = order.total_weight(),
        date = format_required_date(order.date_required),
    )
}

// ============================================================================
// Unit Tests
// ============================================================================
