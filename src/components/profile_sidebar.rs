//! Profile panel for the selected professional.

use leptos::prelude::*;

use crate::components::network_graph::Hcp;

fn growth_text(value: f64) -> String {
	format!("{value:+.1}% this month")
}

#[component]
fn StatCard(label: &'static str, value: String, growth: f64) -> impl IntoView {
	view! {
		<div style="flex: 1; padding: 12px; background: #f9fafb; border-radius: 10px;">
			<p style="margin: 0; font-size: 18px; font-weight: 600; color: #111827;">{value}</p>
			<p style="margin: 0; font-size: 12px; color: #6b7280;">{label}</p>
			<p style=format!(
				"margin: 0; font-size: 12px; color: {};",
				if growth >= 0.0 { "#16a34a" } else { "#dc2626" },
			)>{growth_text(growth)}</p>
		</div>
	}
}

/// Renders nothing until a professional is selected.
#[component]
pub fn ProfileSidebar(#[prop(into)] hcp: Signal<Option<Hcp>>) -> impl IntoView {
	move || {
		hcp.get().map(|hcp| {
			view! {
				<div class="profile-sidebar" style="padding: 16px;">
					<div style="margin-bottom: 12px;">
						<div style="display: flex; align-items: center; gap: 12px;">
							<div style="display: flex; align-items: center; justify-content: center; width: 48px; height: 48px; border-radius: 999px; background: #eff6ff; color: #1d4ed8; font-weight: 600;">
								{hcp.initials()}
							</div>
							<div>
								<h2 style="margin: 0; font-size: 17px; color: #111827;">
									{hcp.name.clone()}
								</h2>
								<p style="margin: 0; font-size: 13px; color: #2563eb;">
									{hcp.specialty.clone()}
								</p>
							</div>
						</div>
						<p style="margin: 8px 0 0; font-size: 13px; color: #4b5563;">
							{hcp.description.clone()}
						</p>
					</div>

					<p style="margin: 0 0 12px; font-size: 13px; color: #6b7280;">
						{format!(
							"{} peers · {} following",
							hcp.peers_count,
							hcp.following_count,
						)}
					</p>

					<div style="display: flex; gap: 12px; margin-bottom: 16px;">
						<StatCard
							label="Patients Served"
							value=hcp.patients_served.to_string()
							growth=hcp.patients_growth
						/>
						<StatCard
							label="Success Rate"
							value=format!("{}%", hcp.success_rate)
							growth=hcp.success_rate_growth
						/>
					</div>

					<div style="margin-bottom: 16px;">
						<h3 style="margin: 0 0 6px; font-size: 14px; color: #111827;">"About"</h3>
						<p style="margin: 0; font-size: 13px; color: #4b5563;">
							{hcp.about.clone()}
						</p>
					</div>

					<div style="margin-bottom: 16px;">
						<h3 style="margin: 0 0 6px; font-size: 14px; color: #111827;">
							"Education"
						</h3>
						{hcp.education
							.iter()
							.cloned()
							.map(|edu| {
								view! {
									<div style="margin-bottom: 8px;">
										<p style="margin: 0; font-size: 13px; font-weight: 500; color: #111827;">
											{edu.institution}
										</p>
										<p style="margin: 0; font-size: 12px; color: #4b5563;">
											{format!("{}, {}", edu.degree, edu.specialization)}
										</p>
										<p style="margin: 0; font-size: 12px; color: #6b7280;">
											{edu.period}
										</p>
									</div>
								}
							})
							.collect_view()}
					</div>

					{(!hcp.publications.is_empty())
						.then(|| {
							view! {
								<div style="margin-bottom: 16px;">
									<h3 style="margin: 0 0 6px; font-size: 14px; color: #111827;">
										"Publications"
									</h3>
									{hcp.publications
										.iter()
										.cloned()
										.map(|publication| {
											view! {
												<div style="margin-bottom: 8px;">
													<p style="margin: 0; font-size: 13px; font-weight: 500; color: #111827;">
														{publication.title}
													</p>
													<p style="margin: 0; font-size: 12px; color: #6b7280;">
														{format!(
															"{} · {}",
															publication.journal,
															publication.year,
														)}
													</p>
												</div>
											}
										})
										.collect_view()}
								</div>
							}
						})}

					{(!hcp.work_experience.is_empty())
						.then(|| {
							view! {
								<div>
									<h3 style="margin: 0 0 6px; font-size: 14px; color: #111827;">
										"Experience"
									</h3>
									{hcp.work_experience
										.iter()
										.cloned()
										.map(|entry| {
											view! {
												<div style="margin-bottom: 8px;">
													<p style="margin: 0; font-size: 13px; font-weight: 500; color: #111827;">
														{entry.position}
													</p>
													<p style="margin: 0; font-size: 12px; color: #4b5563;">
														{entry.institution}
													</p>
													<p style="margin: 0; font-size: 12px; color: #6b7280;">
														{entry.period}
													</p>
												</div>
											}
										})
										.collect_view()}
								</div>
							}
						})}
				</div>
			}
		})
	}
}
