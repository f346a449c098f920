/// Icon glyphs rendered through icon fonts.
///
/// Technology marks come from devicon, UI icons from the site's `extra-*` font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    Html5,
    Css3,
    JavaScript,
    TypeScript,
    React,
    VueJs,
    Php,
    Laravel,
    MySql,
    GitHub,
    LinkedIn,
    Email,
    Menu,
}

impl Glyph {
    pub const fn class(self) -> &'static str {
        match self {
            Self::Html5 => "devicon-html5-plain",
            Self::Css3 => "devicon-css3-plain",
            Self::JavaScript => "devicon-javascript-plain",
            Self::TypeScript => "devicon-typescript-plain",
            Self::React => "devicon-react-original",
            Self::VueJs => "devicon-vuejs-plain",
            Self::Php => "devicon-php-plain",
            Self::Laravel => "devicon-laravel-original",
            Self::MySql => "devicon-mysql-plain",
            Self::GitHub => "devicon-github-plain",
            Self::LinkedIn => "devicon-linkedin-plain",
            Self::Email => "extra-email",
            Self::Menu => "extra-menu",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL: [Glyph; 13] = [
        Glyph::Html5,
        Glyph::Css3,
        Glyph::JavaScript,
        Glyph::TypeScript,
        Glyph::React,
        Glyph::VueJs,
        Glyph::Php,
        Glyph::Laravel,
        Glyph::MySql,
        Glyph::GitHub,
        Glyph::LinkedIn,
        Glyph::Email,
        Glyph::Menu,
    ];

    #[test]
    fn test_glyph_classes_are_unique() {
        let classes: HashSet<&str> = ALL.iter().map(|g| g.class()).collect();
        assert_eq!(classes.len(), ALL.len());
    }
}
