//! Card for one skill with its proficiency bar.

use leptos::prelude::*;

use crate::net::types::SkillRecord;
use crate::util::format::{proficiency_percent, proficiency_tone};
use crate::util::skill_icons::display_icon;

#[component]
pub fn SkillCard(skill: SkillRecord) -> impl IntoView {
    let icon = display_icon(&skill);
    let percent = proficiency_percent(skill.proficiency);
    let fill_class = format!("skill-bar__fill {}", proficiency_tone(skill.proficiency));

    view! {
        <article class="card skill-card">
            <header class="skill-card__header">
                <span class="skill-card__icon">{icon}</span>
                <div>
                    <h3 class="card__title">{skill.name}</h3>
                    <p class="card__subtitle skill-card__category">{skill.category.as_str()}</p>
                </div>
                <span class="badge">{format!("{}/10", skill.proficiency)}</span>
            </header>
            <div class="skill-card__meter">
                <div class="skill-card__meter-label">
                    <span>"Proficiency"</span>
                    <span>{format!("{percent}%")}</span>
                </div>
                <div class="skill-bar">
                    <div class=fill_class style=format!("width: {percent}%")></div>
                </div>
            </div>
        </article>
    }
}
