//! Skills page data and the skill-bar reveal.

use std::time::{Duration, Instant};

use crate::anim::Tween;

pub const REVEAL_DELAY: Duration = Duration::from_millis(500);
pub const REVEAL_DURATION: Duration = Duration::from_millis(1500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency in percent.
    pub level: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

const fn skill(name: &'static str, level: u8) -> Skill {
    Skill { name, level }
}

pub const CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend",
        skills: &[
            skill("JavaScript", 90),
            skill("TypeScript", 85),
            skill("React", 88),
            skill("Vue", 75),
            skill("HTML & CSS", 95),
        ],
    },
    SkillCategory {
        title: "Backend",
        skills: &[
            skill("Node.js", 85),
            skill("Python", 80),
            skill("Go", 70),
            skill("Java", 65),
            skill("PostgreSQL", 78),
        ],
    },
    SkillCategory {
        title: "Tools",
        skills: &[
            skill("Git", 92),
            skill("Docker", 80),
            skill("Linux", 85),
            skill("CI/CD", 75),
        ],
    },
];

/// One reveal animation shared by every bar, restarted on each visit.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkillReveal {
    tween: Option<Tween>,
}

impl SkillReveal {
    /// Restart from zero at `now`.
    pub fn start(&mut self, now: Instant) {
        self.tween = Some(Tween::new(now, REVEAL_DELAY, REVEAL_DURATION));
    }

    /// Fraction of every bar's level shown at `now`. Zero before the first start.
    pub fn progress_at(&self, now: Instant) -> f64 {
        self.tween.map_or(0.0, |tween| tween.progress_at(now))
    }

    /// Displayed width of `skill` in percent.
    pub fn width_at(&self, skill: &Skill, now: Instant) -> f64 {
        f64::from(skill.level) * self.progress_at(now)
    }

    pub fn is_animating(&self, now: Instant) -> bool {
        self.tween.is_some_and(|tween| !tween.is_finished_at(now))
    }
}
