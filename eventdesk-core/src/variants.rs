//! Weekly rotating display text.
//!
//! Six parallel pools, each in two flavors (with and without arts events),
//! each exactly [`ROTATION_SLOTS`] long. One slot index, `iso_week % 12`,
//! is read from all six pools at once so the texts of a digest share a tone.

use serde::Serialize;

use crate::constants::ROTATION_SLOTS;

/// Placeholder in hero texts for the number of distinct activities.
pub const COUNT_PLACEHOLDER: &str = "{sport_count}";

type Pool = [&'static str; ROTATION_SLOTS];

struct TextPools {
    hero: Pool,
    cta_body: Pool,
    intro: Pool,
    title: Pool,
    cta_button: Pool,
    cta_header: Pool,
}

/// One rotation slot's worth of text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TextSelection {
    pub slot: usize,
    pub hero: &'static str,
    pub cta_body: &'static str,
    pub intro: &'static str,
    pub title: &'static str,
    pub cta_button: &'static str,
    pub cta_header: &'static str,
}

impl TextSelection {
    /// Hero text with the activity count filled in.
    pub fn hero_with_count(&self, count: usize) -> String {
        self.hero.replace(COUNT_PLACEHOLDER, &count.to_string())
    }
}

/// Pure function of `(iso_week, has_secondary_events)`.
pub fn select(iso_week: u32, has_secondary_events: bool) -> TextSelection {
    let pools = if has_secondary_events {
        &WITH_SECONDARY
    } else {
        &PRIMARY_ONLY
    };
    let slot = iso_week as usize % ROTATION_SLOTS;

    TextSelection {
        slot,
        hero: pools.hero[slot],
        cta_body: pools.cta_body[slot],
        intro: pools.intro[slot],
        title: pools.title[slot],
        cta_button: pools.cta_button[slot],
        cta_header: pools.cta_header[slot],
    }
}

static PRIMARY_ONLY: TextPools = TextPools {
    hero: [
        "The Sun Devil spirit shines bright this week! Our Kent Denver athletes are ready to compete across {sport_count} sports. Go Devils! 🔥😈",
        "From the Rocky Mountains to the playing fields, our Sun Devils are bringing their competitive spirit to {sport_count} sports this week! 🏔️⚡",
        "Kent Denver's finest are taking the field! Join us as we support {sport_count} sports packed with talent and determination. 🔥🏆",
        "Excellence is our standard! This week features {sport_count} sports where Sun Devil talent shines brightest. 😈🏆",
        "Altitude advantage meets Sun Devil attitude! Our teams are ready to soar across {sport_count} sports this week. Mile High, Sun Devil High! 🏔️🔥",
        "Exciting action is coming your way! Kent Denver's Sun Devils are bringing their best to {sport_count} sports this week. ❤️⚡",
        "The Sun Devil legacy continues! This week's {sport_count} sports showcase why Kent Denver develops champions. Come witness greatness! 🏆🔥",
        "Horns up, spirits high! Our Sun Devils are ready to compete across {sport_count} sports with heart and determination. Join us! 😈⚡",
        "Excellence is our tradition, victory is our goal! This week's {sport_count} sports showcase the depth of Sun Devil pride. 🌊🔥",
        "From sunrise to sunset, our Sun Devils shine! Kent Denver's athletic talent is on display across {sport_count} sports this week. ✨😈",
        "The mountains may be high, but Sun Devil spirits soar higher! Join us for {sport_count} sports of Colorado athletic excellence. 🏔️🔥",
        "Built through dedication, strengthened by Sun Devil spirit! This week's {sport_count} sports will showcase your passion for Kent Denver athletics! 🔥⚡",
    ],
    cta_body: [
        "Show your Sun Devil pride! Come cheer as our athletes compete for Kent Denver across every sport and grade level.",
        "The Sun Devil community needs YOU! Join us and help our teams feel the power of true Kent Denver spirit.",
        "From the mountains to the fields, Sun Devils stick together! Your presence energizes our athletes and shows your school pride.",
        "Horns up, voices loud! Pack the stands and show our student-athletes what it means to have Sun Devil nation behind them.",
        "Feel the excitement, share the spirit! Your cheers are the boost that helps our Sun Devils perform their best. Come join us!",
        "Red and blue runs through our school, victory is our shared goal! Support our teams and be part of the Kent Denver tradition.",
        "The altitude is high, but Sun Devil spirits soar higher! Join your fellow Sun Devils and create an amazing atmosphere.",
        "Champions are supported by community! Be the encouragement that helps our Sun Devils reach new heights of excellence.",
        "Your energy matters, your passion shows! Come witness greatness and help write the next chapter of Sun Devil athletics.",
        "From morning games to evening victories, our Sun Devils need their community! Join us and feel the rush of Kent Denver pride.",
        "The strength is in the details, and you are that strength! Your support creates the home advantage that makes a difference.",
        "Wear red, dream big, cheer loud! Come celebrate the heart, dedication, and talent of Kent Denver's finest student-athletes!",
    ],
    intro: [
        "The Sun Devil spirit is shining bright! Mark your calendars for exciting competitions across every sport and grade level at Kent Denver.",
        "Get ready for great matchups as our talented Sun Devil athletes take center stage in competitions that showcase their skills.",
        "The mountains echo with excitement! Get ready to witness Kent Denver's finest athletes compete with determination this week.",
        "From morning to evening, our Sun Devils are ready to represent our school with pride across multiple sports and divisions.",
        "Witness the excellence that happens when Sun Devil determination meets Colorado spirit in these exciting athletic events.",
        "Our student-athletes are bringing their best to represent the Kent Denver tradition with dedication and school pride.",
        "Feel the excitement in the air as Sun Devil athletics brings together our community for outstanding moments of competition.",
        "Rally behind our teams as they compete with heart, supported by passion and that strong Sun Devil spirit.",
        "The stage is set for excellence! Our Sun Devil athletes are ready to deliver performances that make our school proud.",
        "From courts to fields, our athletes are ready to compete in every arena with the heart of true Kent Denver Sun Devils.",
        "Join the Sun Devil community as we unite to support student-athletes who represent excellence in every competition.",
        "This week brings athletic excellence in action as our Sun Devils compete with the dedication that makes Kent Denver special.",
    ],
    title: [
        "Games This Week",
        "This Week's Games",
        "Kent Denver Athletics",
        "Sun Devil Sports",
        "Weekly Games",
        "Athletic Events",
        "Sports This Week",
        "Sun Devil Schedule",
        "On the Field This Week",
        "Game Week",
        "Sun Devil Athletics",
        "The Week in Sports",
    ],
    cta_button: [
        "Show Sun Devil Pride",
        "Join The Community",
        "Share The Spirit",
        "Horns Up, Hearts Out",
        "Support The Team",
        "Rally The Devils",
        "Wear Red & Blue",
        "Answer The Call",
        "Stand With Us",
        "Embrace The Tradition",
        "Pack The Stands",
        "Cheer Them On",
    ],
    cta_header: [
        "Horns Up, Kent Denver! 🔥😈",
        "Sun Devil Spirit! 🔥⚡",
        "Red & Blue Ready! ❤️💙",
        "Mile High Devils! 🏔️🔥",
        "Show Your Pride! 😈⚡",
        "Sun Devil Strong! 💪🔥",
        "Rise Up, Sun Devils! 🔥😈",
        "School Spirit Awaits! ✨😈",
        "Wear Red, Dream Big! ❤️🏆",
        "Sun Devil Legacy! 🔥🏆",
        "Game On, Devils! ⚡😈",
        "Fill The Stands! 📣🔥",
    ],
};

static WITH_SECONDARY: TextPools = TextPools {
    hero: [
        "The Sun Devil spirit shines bright this week! Our Kent Denver students are ready to compete and perform across {sport_count} sports and arts events. Go Devils! 🔥😈🎭",
        "From the Rocky Mountains to the playing fields and stages, our Sun Devils are bringing their competitive and creative spirit to {sport_count} sports and arts events this week! 🏔️⚡🎨",
        "Kent Denver's finest are taking the field and the stage! Join us as we support {sport_count} sports and performances packed with talent and determination. 🔥🏆🎭",
        "Excellence is our standard! This week features {sport_count} sports and arts events where Sun Devil talent shines brightest. 😈🏆🎵",
        "Altitude advantage meets Sun Devil attitude! Our teams and performers are ready to soar across {sport_count} sports and arts events this week. Mile High, Sun Devil High! 🏔️🔥🎭",
        "Exciting action and performances are coming your way! Kent Denver's Sun Devils are bringing their best to {sport_count} sports and arts events this week. ❤️⚡🎨",
        "The Sun Devil legacy continues! This week's {sport_count} sports and performances showcase why Kent Denver develops champions and artists. Come witness greatness! 🏆🔥🎭",
        "Horns up, spirits high! Our Sun Devils are ready to compete and perform across {sport_count} sports and arts events with heart and determination. Join us! 😈⚡🎵",
        "Excellence is our tradition, victory and artistry are our goals! This week's {sport_count} sports and performances showcase the depth of Sun Devil pride. 🌊🔥🎭",
        "From sunrise to sunset, our Sun Devils shine! Kent Denver's athletic and artistic talent is on display across {sport_count} sports and arts events this week. ✨😈🎨",
        "The mountains may be high, but Sun Devil spirits soar higher! Join us for {sport_count} sports and performances of Colorado excellence. 🏔️🔥🎭",
        "Built through dedication, strengthened by Sun Devil spirit! This week's {sport_count} sports and arts events will showcase your passion for Kent Denver! 🔥⚡🎵",
    ],
    cta_body: [
        "Show your Sun Devil pride! Come cheer and applaud as our athletes and performers represent Kent Denver across every sport, stage, and grade level.",
        "The Sun Devil community needs YOU! Join us and help our teams and performers feel the power of true Kent Denver spirit.",
        "From the mountains to the fields and stages, Sun Devils stick together! Your presence energizes our athletes and artists and shows your school pride.",
        "Horns up, voices loud! Pack the stands and fill the seats to show our student-athletes and performers what it means to have Sun Devil nation behind them.",
        "Feel the excitement, share the spirit! Your cheers and applause are the boost that helps our Sun Devils perform their best. Come join us!",
        "Red and blue runs through our school, victory and artistry are our shared goals! Support our teams and performers and be part of the Kent Denver tradition.",
        "The altitude is high, but Sun Devil spirits soar higher! Join your fellow Sun Devils and create an amazing atmosphere at games and performances.",
        "Champions and artists are supported by community! Be the encouragement that helps our Sun Devils reach new heights of excellence.",
        "Your energy matters, your passion shows! Come witness greatness on fields and stages and help write the next chapter of Sun Devil excellence.",
        "From morning games to evening performances, our Sun Devils need their community! Join us and feel the rush of Kent Denver pride.",
        "The strength is in the details, and you are that strength! Your support creates the home advantage and inspiring atmosphere that makes a difference.",
        "Wear red, dream big, cheer loud! Come celebrate the heart, dedication, and talent of Kent Denver's finest student-athletes and performers!",
    ],
    intro: [
        "The Sun Devil spirit is shining bright! Mark your calendars for exciting competitions and performances across every sport, art form, and grade level at Kent Denver.",
        "Get ready for great matchups and captivating performances as our talented Sun Devil athletes and artists take center stage this week.",
        "The mountains echo with excitement! Get ready to witness Kent Denver's finest athletes and performers compete and create with determination this week.",
        "From morning to evening, our Sun Devils are ready to represent our school with pride across multiple sports, performances, and divisions.",
        "Witness the excellence that happens when Sun Devil determination meets Colorado spirit in these exciting athletic and artistic events.",
        "Our student-athletes and performers are bringing their best to represent the Kent Denver tradition with dedication and school pride.",
        "Feel the excitement in the air as Sun Devil athletics and arts bring together our community for outstanding moments of competition and creativity.",
        "Rally behind our teams and performers as they compete and create with heart, supported by passion and that strong Sun Devil spirit.",
        "The stage is set for excellence! Our Sun Devil athletes and artists are ready to deliver performances that make our school proud.",
        "From courts to fields to stages, our students are ready to compete and perform in every arena with the heart of true Kent Denver Sun Devils.",
        "Join the Sun Devil community as we unite to support student-athletes and performers who represent excellence in every competition and performance.",
        "This week brings athletic and artistic excellence in action as our Sun Devils compete and perform with the dedication that makes Kent Denver special.",
    ],
    title: [
        "Games and Performances This Week",
        "This Week's Games and Shows",
        "Kent Denver Athletics and Arts",
        "Sun Devil Sports and Stages",
        "Weekly Games and Performances",
        "Athletic and Arts Events",
        "Sports and Arts This Week",
        "Sun Devil Schedule",
        "On the Field and On Stage",
        "Game and Show Week",
        "Sun Devil Athletics and Arts",
        "The Week in Sports and Arts",
    ],
    cta_button: [
        "Show Sun Devil Pride",
        "Join The Community",
        "Share The Spirit",
        "Horns Up, Hearts Out",
        "Support Our Students",
        "Rally The Devils",
        "Wear Red & Blue",
        "Answer The Call",
        "Stand With Us",
        "Embrace The Tradition",
        "Fill The Seats",
        "Cheer And Applaud",
    ],
    cta_header: [
        "Horns Up, Kent Denver! 🔥😈",
        "Sun Devil Spirit! 🔥🎭",
        "Red & Blue Ready! ❤️💙",
        "Mile High Devils! 🏔️🔥",
        "Show Your Pride! 😈🎵",
        "Sun Devil Strong! 💪🔥",
        "Rise Up, Sun Devils! 🔥😈",
        "School Spirit Awaits! ✨🎨",
        "Wear Red, Dream Big! ❤️🏆",
        "Sun Devil Legacy! 🔥🏆",
        "Game On, Curtain Up! ⚡🎭",
        "Fill The Seats! 📣🎶",
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_is_repeatable() {
        for week in 1..=53 {
            for flavor in [true, false] {
                assert_eq!(select(week, flavor), select(week, flavor));
            }
        }
    }

    #[test]
    fn selection_repeats_every_twelve_weeks() {
        for week in 1..=53 {
            assert_eq!(select(week, false), select(week + 12, false));
            assert_eq!(select(week, true), select(week + 12, true));
        }
    }

    #[test]
    fn all_pools_share_the_slot() {
        let picked = select(40, false);
        assert_eq!(picked.slot, 4);
        assert_eq!(picked.hero, PRIMARY_ONLY.hero[4]);
        assert_eq!(picked.cta_body, PRIMARY_ONLY.cta_body[4]);
        assert_eq!(picked.intro, PRIMARY_ONLY.intro[4]);
        assert_eq!(picked.title, PRIMARY_ONLY.title[4]);
        assert_eq!(picked.cta_button, PRIMARY_ONLY.cta_button[4]);
        assert_eq!(picked.cta_header, PRIMARY_ONLY.cta_header[4]);
    }

    #[test]
    fn flavors_differ() {
        let sports = select(41, false);
        let arts = select(41, true);
        assert_ne!(sports.hero, arts.hero);
        assert_ne!(sports.title, arts.title);
    }

    #[test]
    fn hero_texts_take_a_count() {
        for pools in [&PRIMARY_ONLY, &WITH_SECONDARY] {
            for hero in pools.hero {
                assert!(hero.contains(COUNT_PLACEHOLDER), "missing placeholder: {hero}");
            }
        }
        assert!(select(3, false).hero_with_count(5).contains("5 sports"));
    }

    #[test]
    fn closing_cta_keeps_its_wording() {
        assert!(PRIMARY_ONLY.cta_body[11].contains("the heart, dedication, and talent of"));
        assert!(WITH_SECONDARY.cta_body[11].contains("the heart, dedication, and talent of"));
        assert!(WITH_SECONDARY.cta_body[10].ends_with(
            "creates the home advantage and inspiring atmosphere that makes a difference."
        ));
        assert!(WITH_SECONDARY.hero[1].contains("our Sun Devils are bringing their competitive"));
    }

    #[test]
    fn entries_are_distinct_within_each_pool() {
        for pools in [&PRIMARY_ONLY, &WITH_SECONDARY] {
            for pool in [
                &pools.hero,
                &pools.cta_body,
                &pools.intro,
                &pools.title,
                &pools.cta_button,
                &pools.cta_header,
            ] {
                let mut sorted = pool.to_vec();
                sorted.sort_unstable();
                sorted.dedup();
                assert_eq!(sorted.len(), ROTATION_SLOTS);
            }
        }
    }
}
