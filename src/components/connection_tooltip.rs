//! Hover card for a connection between two professionals.

use leptos::prelude::*;

use crate::components::network_graph::Connection;

/// Badge styling tier for a connection strength.
pub fn strength_style(strength: i32) -> &'static str {
	if strength >= 4 {
		"background: #dcfce7; color: #166534;"
	} else if strength >= 3 {
		"background: #fef9c3; color: #854d0e;"
	} else {
		"background: #f3f4f6; color: #1f2937;"
	}
}

#[component]
pub fn ConnectionTooltip(
	connection: Connection,
	from_name: String,
	to_name: String,
) -> impl IntoView {
	view! {
		<div
			class="connection-tooltip"
			style="max-width: 300px; padding: 16px; background: white; border: 1px solid #e2e8f0; border-radius: 10px; box-shadow: 0 10px 25px rgba(0, 0, 0, 0.12);"
		>
			<div style="display: flex; align-items: center; gap: 8px; margin-bottom: 8px;">
				<h3 style="margin: 0; font-size: 14px; color: #111827;">
					{connection.kind.label()}
				</h3>
				<span
					style=format!(
						"font-size: 11px; padding: 2px 8px; border-radius: 999px; {}",
						strength_style(connection.strength),
					)
				>
					{format!("Strength: {}/5", connection.strength)}
				</span>
			</div>

			<p style="margin: 0 0 8px; font-size: 13px; color: #4b5563;">
				{connection.description.clone()}
			</p>
			{connection
				.details
				.clone()
				.map(|details| {
					view! {
						<p style="margin: 0 0 8px; padding: 8px; font-size: 12px; color: #374151; background: #f9fafb; border-radius: 6px;">
							{details}
						</p>
					}
				})}

			<p style="margin: 0; padding-top: 8px; border-top: 1px solid #f1f5f9; font-size: 12px; color: #6b7280;">
				<span style="font-weight: 500;">{from_name}</span>
				" ↔ "
				<span style="font-weight: 500;">{to_name}</span>
			</p>
		</div>
	}
}
