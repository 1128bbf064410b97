//! Exception lists - Irregular word sets consulted by rule predicates
//!
//! French orthography is rule-governed until it is not. These static sets
//! carry the irregular words the context patterns cannot express: verbs in
//! `-ier` whose third-plural `-ient` stays silent, nouns and adjectives whose
//! final `-ent` is nasal, loanwords whose final consonant is sounded, and the
//! handful of families (`ch` as /k/, `ill` as /l/, Latin `-um`) that escape
//! their default grapheme readings. The predicates at the bottom are the only
//! code; everything above them is data transcribed from the reference rule
//! asset.

use once_cell::sync::Lazy;
use rustc_hash::FxHashSet;

/// Verbs in `-ier` whose conjugated `-ient` ending is silent
/// ("ils crient", "elles oublient").
static VERBS_IER: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "allier", "amplifier", "apprécier", "approprier", "associer", "balbutier",
        "bénéficier", "certifier", "clarifier", "colorier", "confier", "convier",
        "copier", "crier", "crucifier", "dédier", "défier", "dévier", "différencier",
        "envier", "estropier", "étudier", "expatrier", "expier", "falsifier",
        "fier", "fortifier", "gracier", "humilier", "identifier", "incendier",
        "initier", "injurier", "justifier", "licencier", "lier", "manier", "marier",
        "mendier", "modifier", "multiplier", "mystifier", "nier", "notifier",
        "oublier", "pacifier", "parier", "parodier", "photographier", "planifier",
        "plier", "prier", "privilégier", "publier", "purifier", "qualifier",
        "rallier", "ratifier", "rectifier", "relier", "remercier", "remédier",
        "renier", "répudier", "résilier", "sacrifier", "scier", "signifier",
        "simplifier", "skier", "strier", "supplier", "terrifier", "trier",
        "varier", "vérifier", "vivifier",
    ]
    .into_iter()
    .collect()
});

/// Nouns and adjectives whose final `-ent` is pronounced nasal, as opposed to
/// the silent third-plural verb ending. Monosyllables are handled by length
/// in the predicate and need not be listed.
static ENT_NOUNS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "absent", "accent", "accident", "adhérent", "adolescent", "agent",
        "ambivalent", "antécédent", "apparent", "ardent", "argent", "arpent",
        "auvent", "client", "cohérent", "concurrent", "confident", "content",
        "continent", "couvent", "décadent", "détergent", "différent", "diligent",
        "dissident", "divergent", "éloquent", "éminent", "équivalent", "évident",
        "excellent", "exigent", "fervent", "fréquent", "gradient", "imminent",
        "impatient", "imprudent", "impudent", "incident", "inconscient",
        "indécent", "indigent", "indolent", "indulgent", "ingrédient", "innocent",
        "insolent", "intelligent", "intermittent", "latent", "occident",
        "omniprésent", "onguent", "opulent", "orient", "parent", "patent",
        "patient", "permanent", "pertinent", "précédent", "présent", "président",
        "prudent", "prégnant", "quotient", "récent", "récipient", "régent",
        "résident", "serpent", "sergent", "somnolent", "succulent", "talent",
        "torrent", "transparent", "truculent", "turbulent", "urgent", "véhément",
        "violent", "virulent",
    ]
    .into_iter()
    .collect()
});

/// Third-plural verb forms ending in `-ment`: these are NOT adverbs and keep
/// the silent verb ending ("ils aiment").
static MENT_VERBS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "acclament", "affament", "affirment", "aiment", "alarment", "allument",
        "animent", "arment", "assument", "blâment", "calment", "charment",
        "clament", "confirment", "consomment", "consument", "costument",
        "déclament", "déforment", "dépriment", "désarment", "diffament",
        "dorment", "endorment", "enferment", "enflamment", "entament",
        "enrhument", "estiment", "exclament", "expriment", "exhument",
        "ferment", "filment", "forment", "fument", "gomment", "griment",
        "impriment", "infirment", "informent", "liment",
        "miment", "nomment", "oppriment", "parfument",
        "parsèment", "plument", "présument", "priment", "proclament",
        "programment", "réaffirment", "réaniment", "réclament", "réforment",
        "renomment", "répriment", "ressèment", "résument", "rythment",
        "sèment", "suppriment", "surnomment", "trament", "transforment",
    ]
    .into_iter()
    .collect()
});

/// Words whose final `s` is pronounced (Latin stock and loanwords).
static FINAL_S: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "as", "atlas", "autobus", "bis", "blocus", "bonus", "bus", "cactus",
        "campus", "consensus", "cosmos", "couscous", "cursus", "fils", "focus",
        "hélas", "ibis", "iris", "jadis", "lapsus", "maïs", "mars", "minus",
        "oasis", "os", "ours", "processus", "prospectus", "pubis", "rébus",
        "rhinocéros", "sas", "sens", "stimulus", "tennis", "terminus",
        "tournevis", "tumulus", "virus", "vis",
    ]
    .into_iter()
    .collect()
});

/// Words whose final `t` is pronounced.
static FINAL_T: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "août", "azimut", "brut", "but", "chut", "déficit", "dot", "granit",
        "huit", "mat", "mazout", "net", "occiput", "ouest", "scorbut", "scout",
        "sept", "transit", "ut", "zut",
    ]
    .into_iter()
    .collect()
});

/// Words whose final `c` is pronounced despite a preceding `n`.
static FINAL_C_AFTER_N: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["donc", "zinc"].into_iter().collect());

/// Words whose final `p` is pronounced.
static FINAL_P: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    ["cap", "cep", "clip", "handicap", "slip", "stop", "top", "vamp"]
        .into_iter()
        .collect()
});

/// Words whose final `f` is silent.
static FINAL_F_SILENT: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["cerf", "clef", "nerf", "serf"].into_iter().collect());

/// Words whose final `d` is pronounced.
static FINAL_D: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["caïd", "celluloïd", "sud"].into_iter().collect());

/// Words whose final `l` is silent after `i`.
static FINAL_L_SILENT: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    ["fusil", "gentil", "outil", "persil", "sourcil"]
        .into_iter()
        .collect()
});

/// Words whose final `g` is pronounced.
static FINAL_G: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    ["gag", "gang", "gong", "grog", "iceberg", "zigzag"]
        .into_iter()
        .collect()
});

/// Words whose final `z` is pronounced.
static FINAL_Z: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["fez", "gaz", "merguez"].into_iter().collect());

/// Final `x` pronounced /s/.
static FINAL_X_S: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["coccyx", "dix", "six"].into_iter().collect());

/// Final `x` pronounced /ks/.
static FINAL_X_KS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    ["box", "fax", "index", "larynx", "latex", "lynx", "silex", "thorax"]
        .into_iter()
        .collect()
});

/// Ordinals where `x` reads /z/.
static X_AS_Z: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "deuxième", "deuxièmement", "deuxièmes", "dixième", "dixièmement",
        "dixièmes", "sixième", "sixièmement", "sixièmes",
    ]
    .into_iter()
    .collect()
});

/// Stems where `ch` reads /k/ (Greek stock, mostly).
static CH_AS_K_STEMS: &[&str] = &[
    "archa", "archange", "archéo", "chaos", "chaot", "chianti", "chlor",
    "chœur", "chalde", "cholé", "cholest", "choral", "chorégraph", "choriste",
    "chrom", "chron", "écho", "lichen", "orch", "psych", "tech", "varech",
];

/// Stems where `ill` keeps /l/ instead of the yod reading.
static ILL_AS_L_STEMS: &[&str] = &[
    "bacill", "capill", "distill", "instill", "maxill", "mill", "oscill",
    "pupill", "tranquill", "vill",
];

/// Stems where `gn` keeps the hard /gn/ reading instead of /ɲ/.
static GN_HARD_STEMS: &[&str] = &["diagnost", "gnom", "gnou", "magnum", "stagn"];

/// Latin loanwords where final `-um` reads /ɔm/.
static UM_LATIN: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "album", "aquarium", "auditorium", "forum", "géranium", "maximum",
        "minimum", "muséum", "opium", "planétarium", "podium", "référendum",
        "sérum", "symposium", "ultimatum", "uranium",
    ]
    .into_iter()
    .collect()
});

/// Forms of avoir where initial `eu`/`eû` reads /y/.
static EU_AVOIR: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    ["eu", "eue", "eues", "eurent", "eus", "eut", "eût", "eûmes", "eûtes"]
        .into_iter()
        .collect()
});

/// Stems where initial `enn` is nasal ("ennui" family; "ennemi" is not).
static ENN_NASAL_STEMS: &[&str] = &["ennui", "ennuy"];

/// Words where final `-er` keeps the open /ɛr/ reading.
static ER_SOUNDED: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    [
        "amer", "cancer", "cher", "cuiller", "enfer", "éther", "fer", "fier",
        "gangster", "hier", "hiver", "hyper", "master", "mer", "revolver",
        "super", "ver",
    ]
    .into_iter()
    .collect()
});

/// Words where final `-en` is /ɛ̃/ without a front vowel before it.
static EN_AS_IN: Lazy<FxHashSet<&'static str>> =
    Lazy::new(|| ["examen", "examens"].into_iter().collect());

/// Stems where `w` reads /v/.
static W_AS_V_STEMS: &[&str] = &["wagon", "wallon", "wassingue"];

/// Words where a medial `p` is silent, with the stem's `p` offset.
static P_SILENT_STEMS: &[(&str, usize)] = &[
    ("bapt", 2),
    ("compt", 3),
    ("dompt", 3),
    ("sculpt", 4),
];

static P_SILENT_WORDS: Lazy<FxHashSet<&'static str>> = Lazy::new(|| {
    ["sept", "septième", "septièmement", "septièmes"]
        .into_iter()
        .collect()
});

fn char_len(word: &str) -> usize {
    word.chars().count()
}

fn strip_plural(word: &str) -> &str {
    word.strip_suffix('s').unwrap_or(word)
}

// --- predicates, all pure over (lowercased word, char offset) ---

/// `-ient` at the end of a conjugated `-ier` verb ("ils crient"): the whole
/// ending is silent. Fires at the `e` of the final `ent`.
pub(crate) fn check_ier_verb_ent(word: &str, pos: usize) -> bool {
    let len = char_len(word);
    if pos + 3 != len || !word.ends_with("ient") {
        return false;
    }
    // reconstruct the infinitive: strip "ient", append "ier"
    let stem_end = word.len() - "ient".len();
    let infinitive = format!("{}ier", &word[..stem_end]);
    VERBS_IER.contains(infinitive.as_str())
}

/// `-ment` adverb ("rapidement"): nasal, unless the word is a listed
/// third-plural verb form. Fires at the `e` of the final `ent`.
pub(crate) fn check_ment_adverb(word: &str, pos: usize) -> bool {
    pos + 3 == char_len(word) && word.ends_with("ment") && !MENT_VERBS.contains(word)
}

/// Final `-ent` pronounced nasal: monosyllables ("vent", "dent") and listed
/// nouns/adjectives. Everything else ending in `-ent` is read as a silent
/// verb ending.
pub(crate) fn check_ent_sounded(word: &str, pos: usize) -> bool {
    let base = strip_plural(word);
    if pos + 3 != char_len(base) || !base.ends_with("ent") {
        return false;
    }
    char_len(base) <= 4 || ENT_NOUNS.contains(base)
}

pub(crate) fn check_final_s_sounded(word: &str, _pos: usize) -> bool {
    FINAL_S.contains(word)
}

pub(crate) fn check_final_t_sounded(word: &str, _pos: usize) -> bool {
    FINAL_T.contains(word)
}

pub(crate) fn check_final_c_sounded(word: &str, _pos: usize) -> bool {
    FINAL_C_AFTER_N.contains(word)
}

pub(crate) fn check_final_p_sounded(word: &str, _pos: usize) -> bool {
    FINAL_P.contains(strip_plural(word))
}

pub(crate) fn check_final_f_silent(word: &str, _pos: usize) -> bool {
    FINAL_F_SILENT.contains(strip_plural(word))
}

pub(crate) fn check_final_d_sounded(word: &str, _pos: usize) -> bool {
    FINAL_D.contains(strip_plural(word))
}

pub(crate) fn check_final_l_silent(word: &str, _pos: usize) -> bool {
    FINAL_L_SILENT.contains(strip_plural(word))
}

pub(crate) fn check_final_g_sounded(word: &str, _pos: usize) -> bool {
    FINAL_G.contains(strip_plural(word))
}

pub(crate) fn check_final_z_sounded(word: &str, _pos: usize) -> bool {
    FINAL_Z.contains(word)
}

pub(crate) fn check_final_x_as_s(word: &str, _pos: usize) -> bool {
    FINAL_X_S.contains(word)
}

pub(crate) fn check_final_x_as_ks(word: &str, _pos: usize) -> bool {
    FINAL_X_KS.contains(strip_plural(word))
}

pub(crate) fn check_x_as_z(word: &str, _pos: usize) -> bool {
    X_AS_Z.contains(word)
}

/// `ch` reading /k/: the scan position must sit inside a listed stem.
pub(crate) fn check_ch_as_k(word: &str, pos: usize) -> bool {
    CH_AS_K_STEMS
        .iter()
        .any(|stem| word.starts_with(stem) && pos < char_len(stem))
}

/// `ill` family keeping /l/ ("ville", "million", "osciller").
pub(crate) fn check_ill_keeps_l(word: &str, _pos: usize) -> bool {
    ILL_AS_L_STEMS.iter().any(|stem| word.starts_with(stem))
}

/// Complement of [`check_ill_keeps_l`], used by the yod-reading rules.
pub(crate) fn check_ill_takes_yod(word: &str, pos: usize) -> bool {
    !check_ill_keeps_l(word, pos)
}

/// `gn` keeping the hard /gn/ reading ("gnome", "stagner", "diagnostic").
pub(crate) fn check_gn_hard(word: &str, _pos: usize) -> bool {
    GN_HARD_STEMS.iter().any(|stem| word.starts_with(stem))
}

pub(crate) fn check_um_latin(word: &str, pos: usize) -> bool {
    let base = strip_plural(word);
    pos + 2 == char_len(base) && UM_LATIN.contains(base)
}

pub(crate) fn check_eu_avoir(word: &str, pos: usize) -> bool {
    pos == 0 && EU_AVOIR.contains(word)
}

pub(crate) fn check_enn_nasal(word: &str, pos: usize) -> bool {
    pos == 0 && ENN_NASAL_STEMS.iter().any(|stem| word.starts_with(stem))
}

pub(crate) fn check_er_sounded(word: &str, pos: usize) -> bool {
    pos + 2 == char_len(word) && ER_SOUNDED.contains(word)
}

pub(crate) fn check_en_as_in(word: &str, pos: usize) -> bool {
    pos + 2 == char_len(word) && EN_AS_IN.contains(word)
}

pub(crate) fn check_w_as_v(word: &str, pos: usize) -> bool {
    pos == 0 && W_AS_V_STEMS.iter().any(|stem| word.starts_with(stem))
}

pub(crate) fn check_femme(word: &str, pos: usize) -> bool {
    pos == 1 && (word == "femme" || word == "femmes")
}

pub(crate) fn check_est_verb(word: &str, pos: usize) -> bool {
    word == "est" && pos == 1
}

pub(crate) fn check_et_word(word: &str, pos: usize) -> bool {
    word == "et" && pos == 0
}

/// Silent medial `p` ("sept", "compter", "baptême", "sculpter").
pub(crate) fn check_p_silent(word: &str, pos: usize) -> bool {
    if P_SILENT_WORDS.contains(word) && pos == 2 {
        return true;
    }
    P_SILENT_STEMS
        .iter()
        .any(|&(stem, p_idx)| word.starts_with(stem) && pos == p_idx)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ier_verb_ent() {
        assert!(check_ier_verb_ent("crient", 3));
        assert!(check_ier_verb_ent("oublient", 5));
        assert!(!check_ier_verb_ent("client", 3)); // noun, not a -ier verb
        assert!(!check_ier_verb_ent("crient", 1)); // wrong offset
    }

    #[test]
    fn test_ment_adverb() {
        assert!(check_ment_adverb("rapidement", 7));
        assert!(check_ment_adverb("comment", 4));
        assert!(!check_ment_adverb("aiment", 3)); // blacklisted verb form
    }

    #[test]
    fn test_ent_sounded() {
        assert!(check_ent_sounded("vent", 1)); // monosyllable
        assert!(check_ent_sounded("serpent", 4)); // listed noun
        assert!(check_ent_sounded("serpents", 4)); // plural of listed noun
        assert!(!check_ent_sounded("mangent", 4)); // verb ending
    }

    #[test]
    fn test_ch_as_k_positional() {
        assert!(check_ch_as_k("orchestre", 2));
        assert!(check_ch_as_k("psychologue", 3));
        assert!(!check_ch_as_k("chose", 0));
    }

    #[test]
    fn test_ill_keeps_l() {
        assert!(check_ill_keeps_l("ville", 0));
        assert!(check_ill_keeps_l("million", 0));
        assert!(!check_ill_keeps_l("famille", 0));
    }

    #[test]
    fn test_p_silent() {
        assert!(check_p_silent("sept", 2));
        assert!(check_p_silent("compter", 3));
        assert!(!check_p_silent("septembre", 2)); // p pronounced here
        assert!(!check_p_silent("pont", 0));
    }

    #[test]
    fn test_final_consonant_lists() {
        assert!(check_final_s_sounded("fils", 3));
        assert!(check_final_t_sounded("huit", 3));
        assert!(!check_final_s_sounded("chats", 4));
    }
}
