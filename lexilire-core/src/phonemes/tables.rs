//! Transcription tables - Per-letter ordered rule tables for French
//!
//! One table per letter the automaton recognizes. Within a table, rules are
//! ordered from most to least specific and the first match wins; reordering
//! a table changes the transcription. Nasal rules exclude a following vowel
//! or `n`/`m` so that "ami" stays oral while "ambre" nasalizes. Exception
//! word lists live in `exceptions.rs`; the rules here only reference their
//! predicates.

use once_cell::sync::Lazy;
use rustc_hash::FxHashMap;

use super::exceptions::*;
use super::rules::{rule, LetterRules, Rule};
use super::types::PhonemeId::*;

/// Vowel letters, as a character class body.
const V: &str = "aàâäeéèêëiîïoôöuùûüyœæ";
/// Consonant letters, as a character class body.
const C: &str = "bcçdfghjklmnpqrstvwxz";

static TABLES: Lazy<FxHashMap<char, LetterRules>> = Lazy::new(build_tables);

/// Rule table for `letter`, or `None` when the automaton does not know the
/// letter at all (digits, punctuation, foreign scripts).
pub(crate) fn letter_rules(letter: char) -> Option<&'static LetterRules> {
    TABLES.get(&letter)
}

fn plain(phoneme: super::types::PhonemeId) -> LetterRules {
    LetterRules {
        rules: Vec::new(),
        final_rule: None,
        default: (Some(phoneme), 1),
    }
}

fn with_rules(rules: Vec<Rule>, default: super::types::PhonemeId) -> LetterRules {
    LetterRules {
        rules,
        final_rule: None,
        default: (Some(default), 1),
    }
}

fn build_tables() -> FxHashMap<char, LetterRules> {
    let mut t = FxHashMap::default();

    t.insert('a', table_a());
    t.insert('à', plain(A));
    t.insert('â', plain(A));
    t.insert('ä', plain(A));
    t.insert('b', table_b());
    t.insert('c', table_c());
    t.insert('ç', plain(S));
    t.insert('d', table_d());
    t.insert('e', table_e());
    t.insert('é', plain(EAigu));
    t.insert('è', plain(EOuvert));
    t.insert('ê', plain(EOuvert));
    t.insert('ë', plain(EOuvert));
    t.insert('f', table_f());
    t.insert('g', table_g());
    t.insert('h', plain(Muet));
    t.insert('i', table_i());
    t.insert('î', plain(I));
    t.insert('ï', plain(I));
    t.insert('j', plain(Je));
    t.insert('k', plain(K));
    t.insert('l', table_l());
    t.insert('m', table_m());
    t.insert('n', table_n());
    t.insert('o', table_o());
    t.insert('ô', plain(OFerme));
    t.insert('ö', plain(OOuvert));
    t.insert('œ', table_oe());
    t.insert('æ', plain(EAigu));
    t.insert('p', table_p());
    t.insert('q', table_q());
    t.insert('r', table_r());
    t.insert('s', table_s());
    t.insert('t', table_t());
    t.insert('u', table_u());
    t.insert('ù', plain(U));
    t.insert('û', plain(U));
    t.insert('ü', plain(U));
    t.insert('v', plain(V_));
    t.insert('w', table_w());
    t.insert('x', table_x());
    t.insert('y', table_y());
    t.insert('z', table_z());

    t
}

// `V` the phoneme collides with `V` the vowel class, so alias it locally.
use super::types::PhonemeId::V as V_;

fn table_a() -> LetterRules {
    with_rules(
        vec![
            rule("aon_nasal", An, 3).fwd("aons?$").build(),
            rule("ain_nasal", In, 3)
                .fwd(&format!("ain(?:[^{V}nm]|$)"))
                .build(),
            rule("aim_nasal", In, 3).fwd(&format!("aim(?:[^{V}]|$)")).build(),
            rule("an_nasal", An, 2).fwd(&format!("an(?:[^{V}nm]|$)")).build(),
            rule("am_nasal", An, 2).fwd("am[bp]").build(),
            rule("au", OFerme, 2).fwd("au").build(),
            rule("ay_closed", EOuvert, 2)
                .fwd(&format!("ay(?:[^{V}]|$)"))
                .build(),
            // travail, bataille: the i belongs to the yod that follows
            rule("a_before_il", A, 1).fwd("ails?$|aill").build(),
            rule("ai_final", EAigu, 2).fwd("ai$").build(),
            rule("ai", EOuvert, 2).fwd("ai").build(),
        ],
        A,
    )
}

fn table_b() -> LetterRules {
    with_rules(
        vec![
            rule("bb", B, 2).fwd("bb").build(),
            // plomb, aplomb
            rule("b_final_after_m", Muet, 1).fwd("bs?$").bwd("m").build(),
        ],
        B,
    )
}

fn table_c() -> LetterRules {
    with_rules(
        vec![
            rule("ch_hard_words", K, 2).fwd("ch").check(check_ch_as_k).build(),
            rule("ch_cluster", K, 2).fwd("ch[lr]").build(),
            rule("ch", Ch, 2).fwd("ch").build(),
            rule("ck", K, 2).fwd("ck").build(),
            // accent: first c reads /k/, second stays soft
            rule("cc_soft", K, 1).fwd("cc[eéèêëiîïy]").build(),
            rule("cc", K, 2).fwd("cc").build(),
            rule("c_soft", S, 1).fwd("c[eéèêëiîïy]").build(),
            rule("c_final_sounded", K, 1).fwd("c$").check(check_final_c_sounded).build(),
            // banc, blanc, flanc
            rule("c_final_after_n", Muet, 1).fwd("cs?$").bwd("n").build(),
        ],
        K,
    )
}

fn table_d() -> LetterRules {
    with_rules(
        vec![
            rule("dd", D, 2).fwd("dd").build(),
            rule("d_final_sounded", D, 1).fwd("d$").check(check_final_d_sounded).build(),
            rule("d_final", Muet, 1).fwd("ds?$").build(),
        ],
        D,
    )
}

fn table_e() -> LetterRules {
    LetterRules {
        rules: vec![
            rule("eau", OFerme, 3).fwd("eau").build(),
            // eu / eut / eûmes: past tense of avoir reads /y/
            rule("eu_avoir", U, 2).fwd("e[uû]").check(check_eu_avoir).build(),
            rule("ein_nasal", In, 3).fwd(&format!("ein(?:[^{V}nm]|$)")).build(),
            rule("eim_nasal", In, 3).fwd(&format!("eim(?:[^{V}]|$)")).build(),
            // écureuil, feuille
            rule("euil", EuOuvert, 2).fwd("euils?$|euill").build(),
            rule("eur", EuOuvert, 2).fwd("eur").build(),
            rule("eu", EuFerme, 2).fwd("e[uû]").build(),
            rule("femme", A, 1).check(check_femme).build(),
            rule("emment_adverb", A, 1).fwd("emment$").build(),
            rule("enn_nasal", An, 2).fwd("enn").check(check_enn_nasal).build(),
            // -ier verbs conjugated: "crient", "plient" end silent
            rule("ient_verb", Muet, 3).fwd("ent$").check(check_ier_verb_ent).build(),
            rule("ment_adverb", An, 2).fwd("ent$").check(check_ment_adverb).build(),
            rule("ent_sounded", An, 2).fwd("ent$").check(check_ent_sounded).build(),
            rule("ent_verb_silent", Muet, 3).fwd("ent$").build(),
            // bien, moyen, lycéen
            rule("en_front_nasal", In, 2)
                .fwd(&format!("en(?:[^{V}nm]|$)"))
                .bwd("[iyé]")
                .build(),
            rule("en_as_in_words", In, 2).fwd("en$").check(check_en_as_in).build(),
            rule("en_nasal", An, 2).fwd(&format!("en(?:[^{V}nmh]|$)")).build(),
            rule("em_nasal", An, 2).fwd("em[bp]").build(),
            rule("er_sounded", EOuvert, 1).fwd("er").check(check_er_sounded).build(),
            rule("er_final", EAigu, 2).fwd("ers?$").bwd("^.{2,}$").build(),
            rule("ez_final", EAigu, 2).fwd("ez$").build(),
            rule("ed_final", EAigu, 1).fwd("eds?$").build(),
            rule("et_word", EAigu, 2).check(check_et_word).build(),
            rule("et_final", EOuvert, 1).fwd("ets?$").build(),
            // les, des, mes, ses, tes, ces
            // soleil, vieille
            rule("e_before_il", EOuvert, 1).fwd("eils?$|eill").build(),
            rule("es_monosyllable", EAigu, 2)
                .fwd("es$")
                .bwd(&format!("^[{C}]?$"))
                .build(),
            rule("es_final", ECaduc, 1).fwd("es$").build(),
            // digraph after the e belongs to the next syllable: "recherche"
            rule("e_before_digraph", ECaduc, 1)
                .fwd(&format!("e(?:ch|ph|th|gn)[{V}]"))
                .build(),
            // obstruent + liquid onset: "retrouble" keeps the schwa
            rule("e_before_cluster", ECaduc, 1).fwd("e[bcdfgptv][lr]").build(),
            // exact, texte: e before x opens
            rule("e_before_x", EOuvert, 1).fwd("ex").build(),
            rule("e_closed_syllable", EOuvert, 1).fwd(&format!("e[{C}][{C}]")).build(),
            rule("e_final_consonant", EOuvert, 1).fwd(&format!("e[{C}]$")).build(),
        ],
        final_rule: Some((Some(ECaduc), 1)),
        default: (Some(ECaduc), 1),
    }
}

fn table_f() -> LetterRules {
    with_rules(
        vec![
            rule("ff", F, 2).fwd("ff").build(),
            rule("f_final_silent", Muet, 1).fwd("fs?$").check(check_final_f_silent).build(),
        ],
        F,
    )
}

fn table_g() -> LetterRules {
    with_rules(
        vec![
            rule("gn_hard", G, 1).fwd("gn").check(check_gn_hard).build(),
            rule("gn", Gn, 2).fwd("gn").build(),
            // suggérer: first g reads /g/, second stays soft
            rule("gg_soft", G, 1).fwd("gg[eéèêiy]").build(),
            rule("gg", G, 2).fwd("gg").build(),
            rule("gu_soft", G, 2).fwd("gu[eéèêëiîïy]").build(),
            rule("ge_hard_vowel", Je, 2).fwd("ge[aoôu]").build(),
            rule("g_soft", Je, 1).fwd("g[eéèêëiîïy]").build(),
            rule("g_final_sounded", G, 1).fwd("g$").check(check_final_g_sounded).build(),
            rule("gt_final", Muet, 1).fwd("gts?$").build(),
            rule("g_final", Muet, 1).fwd("gs?$").build(),
        ],
        G,
    )
}

fn table_i() -> LetterRules {
    with_rules(
        vec![
            rule("ill_yod", Yod, 3)
                .fwd("ill")
                .bwd(&format!("[{V}]"))
                .check(check_ill_takes_yod)
                .build(),
            rule("il_final_yod", Yod, 2)
                .fwd("ils?$")
                .bwd(&format!("[{V}]"))
                .build(),
            rule("in_nasal", In, 2).fwd(&format!("in(?:[^{V}nm]|$)")).build(),
            rule("im_nasal", In, 2).fwd("im[bp]").build(),
            rule("i_glide", Yod, 1)
                .fwd(&format!("i(?:[aàâoôuù]|[éèêë]|e[^s])"))
                .build(),
        ],
        I,
    )
}

fn table_l() -> LetterRules {
    with_rules(
        vec![
            // fille, brille: ll after consonant+i reads /j/
            rule("ll_yod", Yod, 2)
                .fwd("ll")
                .bwd(&format!("^.*[^{V}]i$"))
                .check(check_ill_takes_yod)
                .build(),
            rule("ll", L, 2).fwd("ll").build(),
            rule("l_final_silent", Muet, 1)
                .fwd("ls?$")
                .check(check_final_l_silent)
                .build(),
        ],
        L,
    )
}

fn table_m() -> LetterRules {
    with_rules(vec![rule("mm", M, 2).fwd("mm").build()], M)
}

fn table_n() -> LetterRules {
    with_rules(vec![rule("nn", N, 2).fwd("nn").build()], N)
}

fn table_o() -> LetterRules {
    LetterRules {
        rules: vec![
            rule("ouill", Ou, 2).fwd("ouill|ouils?$").build(),
            rule("ou_glide", W, 2).fwd(&format!("ou[{V}]")).build(),
            rule("ou", Ou, 2).fwd("o[uùû]").build(),
            rule("oin_nasal", Win, 3).fwd(&format!("oin(?:[^{V}nm]|$)")).build(),
            rule("oy_glide", Wa, 2).fwd(&format!("oy[{V}]")).build(),
            rule("oi", Wa, 2).fwd("o[iî]").build(),
            rule("on_nasal", On, 2).fwd(&format!("on(?:[^{V}nmh]|$)")).build(),
            rule("om_nasal", On, 2).fwd("om(?:[bp]|$)").build(),
            // rose, chose: o before intervocalic s closes
            rule("o_closed_s", OFerme, 1).fwd(&format!("os[{V}]")).build(),
            rule("o_closed_final", OFerme, 1).fwd("o(?:[td]s?|s)$").build(),
        ],
        final_rule: Some((Some(OFerme), 1)),
        default: (Some(OOuvert), 1),
    }
}

fn table_oe() -> LetterRules {
    with_rules(
        vec![
            rule("oeil", EuOuvert, 1).fwd("œils?$").build(),
            rule("oeu", EuOuvert, 2).fwd("œu").build(),
        ],
        EuOuvert,
    )
}

fn table_p() -> LetterRules {
    with_rules(
        vec![
            rule("ph", F, 2).fwd("ph").build(),
            rule("pp", P, 2).fwd("pp").build(),
            rule("p_silent_medial", Muet, 1).check(check_p_silent).build(),
            rule("p_final_sounded", P, 1).fwd("ps?$").check(check_final_p_sounded).build(),
            rule("p_final", Muet, 1).fwd("ps?$").build(),
        ],
        P,
    )
}

fn table_q() -> LetterRules {
    with_rules(vec![rule("qu", K, 2).fwd("qu").build()], K)
}

fn table_r() -> LetterRules {
    with_rules(vec![rule("rr", R, 2).fwd("rr").build()], R)
}

fn table_s() -> LetterRules {
    with_rules(
        vec![
            rule("ss", S, 2).fwd("ss").build(),
            rule("est_verb", Muet, 1).check(check_est_verb).build(),
            rule("s_final_sounded", S, 1).fwd("s$").check(check_final_s_sounded).build(),
            rule("s_final", Muet, 1).fwd("s$").build(),
            rule("s_intervocalic", Z, 1)
                .fwd(&format!("s[{V}]"))
                .bwd(&format!("[{V}]"))
                .build(),
        ],
        S,
    )
}

fn table_t() -> LetterRules {
    with_rules(
        vec![
            rule("tt", T, 2).fwd("tt").build(),
            rule("th", T, 2).fwd("th").build(),
            // nation yes, question no
            rule("tion", S, 1).fwd("tion").bwd("^(?:.*[^s])?$").build(),
            rule("t_final_sounded", T, 1).fwd("t$").check(check_final_t_sounded).build(),
            rule("t_final", Muet, 1).fwd("ts?$").build(),
        ],
        T,
    )
}

fn table_u() -> LetterRules {
    with_rules(
        vec![
            rule("um_latin", OOuvert, 1).fwd("ums?$").check(check_um_latin).build(),
            rule("un_nasal", Un, 2).fwd(&format!("un(?:[^{V}nm]|$)")).build(),
            rule("um_nasal", Un, 2).fwd("um(?:[bp]|$)").build(),
            rule("u_glide", Ue, 1)
                .fwd("u(?:[aàâiîoô]|[éèêë]|e[^s])")
                .build(),
        ],
        U,
    )
}

fn table_w() -> LetterRules {
    with_rules(
        vec![rule("w_as_v", V_, 1).check(check_w_as_v).build()],
        W,
    )
}

fn table_x() -> LetterRules {
    with_rules(
        vec![
            rule("x_as_z", Z, 1).check(check_x_as_z).build(),
            rule("x_final_s", S, 1).fwd("x$").check(check_final_x_as_s).build(),
            rule("x_final_ks", Ks, 1).fwd("x$").check(check_final_x_as_ks).build(),
            rule("x_final", Muet, 1).fwd("x$").build(),
            // exact, examen: word-initial "ex" before a vowel voices
            rule("x_voiced", Gz, 1).fwd(&format!("x[{V}]")).bwd("^e$").build(),
        ],
        Ks,
    )
}

fn table_y() -> LetterRules {
    with_rules(
        vec![
            rule("yn_nasal", In, 2).fwd(&format!("yn(?:[^{V}nm]|$)")).build(),
            rule("ym_nasal", In, 2).fwd("ym(?:[bp]|$)").build(),
            rule("y_glide", Yod, 1).fwd(&format!("y[{V}]")).build(),
        ],
        I,
    )
}

fn table_z() -> LetterRules {
    with_rules(
        vec![
            rule("zz", Z, 2).fwd("zz").build(),
            rule("z_final_sounded", Z, 1).fwd("z$").check(check_final_z_sounded).build(),
            rule("z_final", Muet, 1).fwd("z$").build(),
        ],
        Z,
    )
}
