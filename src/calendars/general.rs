//! Sanctoral of the General Roman Calendar, plus the moveable solemnities and
//! memorials that are not part of the Proper of Time.

use once_cell::sync::Lazy;

use crate::celebration::{Anchor, Celebration, fixed, relative};

pub(crate) static GENERAL_ROMAN_CALENDAR: Lazy<Vec<Celebration>> = Lazy::new(|| {
    vec![
        // --- Moveable -------------------------------------------------------
        celebration! { id: "mary_mother_of_the_church", date: relative(Anchor::Pentecost, 1), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "most_holy_trinity", date: relative(Anchor::Pentecost, 7), rank: Solemnity, precedence: GeneralSolemnity, colors: [White] },
        celebration! {
            id: "most_holy_body_and_blood_of_christ",
            date: relative(Anchor::CorpusChristi, 0),
            rank: Solemnity,
            precedence: GeneralSolemnity,
            colors: [White],
            obligation: true,
        },
        celebration! { id: "most_sacred_heart_of_jesus", date: relative(Anchor::Easter, 68), rank: Solemnity, precedence: GeneralSolemnity, colors: [White] },
        celebration! { id: "immaculate_heart_of_mary", date: relative(Anchor::Easter, 69), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! {
            id: "our_lord_jesus_christ_king_of_the_universe",
            date: relative(Anchor::FirstSundayOfAdvent, -7),
            rank: Solemnity,
            precedence: GeneralSolemnity,
            colors: [White],
        },
        // --- January --------------------------------------------------------
        celebration! { id: "basil_the_great_and_gregory_nazianzen_bishops", date: fixed(1, 2), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "most_holy_name_of_jesus", date: fixed(1, 3), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "raymond_of_penyafort_priest", date: fixed(1, 7), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "hilary_of_poitiers_bishop", date: fixed(1, 13), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "anthony_of_egypt_abbot", date: fixed(1, 17), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "fabian_i_pope", date: fixed(1, 20), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "sebastian_of_milan_martyr", date: fixed(1, 20), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "agnes_of_rome_virgin", date: fixed(1, 21), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "vincent_of_saragossa_deacon", date: fixed(1, 22), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "francis_de_sales_bishop", date: fixed(1, 24), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "conversion_of_saint_paul_the_apostle", date: fixed(1, 25), rank: Feast, precedence: GeneralFeast, colors: [White] },
        celebration! { id: "timothy_of_ephesus_and_titus_of_crete_bishops", date: fixed(1, 26), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "angela_merici_virgin", date: fixed(1, 27), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "thomas_aquinas_priest", date: fixed(1, 28), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "john_bosco_priest", date: fixed(1, 31), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        // --- February -------------------------------------------------------
        celebration! { id: "presentation_of_the_lord", date: fixed(2, 2), rank: Feast, precedence: GeneralLordFeast, colors: [White] },
        celebration! { id: "blaise_of_sebaste_bishop", date: fixed(2, 3), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "ansgar_of_hamburg_bishop", date: fixed(2, 3), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "agatha_of_sicily_virgin", date: fixed(2, 5), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "paul_miki_and_companions_martyrs", date: fixed(2, 6), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "jerome_emiliani", date: fixed(2, 8), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "josephine_bakhita_virgin", date: fixed(2, 8), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "scholastica_of_nursia_virgin", date: fixed(2, 10), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "our_lady_of_lourdes", date: fixed(2, 11), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "cyril_the_philosopher_monk_and_methodius_of_thessaloniki_bishop", date: fixed(2, 14), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "seven_holy_founders_of_the_servite_order", date: fixed(2, 17), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "peter_damian_bishop", date: fixed(2, 21), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "chair_of_saint_peter_the_apostle", date: fixed(2, 22), rank: Feast, precedence: GeneralFeast, colors: [White] },
        celebration! { id: "polycarp_of_smyrna_bishop", date: fixed(2, 23), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "gregory_of_narek_abbot", date: fixed(2, 27), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        // --- March ----------------------------------------------------------
        celebration! { id: "casimir_of_poland", date: fixed(3, 4), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "perpetua_of_carthage_and_felicity_of_carthage_martyrs", date: fixed(3, 7), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "john_of_god_duarte_cidade_religious", date: fixed(3, 8), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "frances_of_rome_religious", date: fixed(3, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "patrick_of_ireland_bishop", date: fixed(3, 17), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "cyril_of_jerusalem_bishop", date: fixed(3, 18), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! {
            id: "joseph_spouse_of_mary",
            date: fixed(3, 19),
            rank: Solemnity,
            precedence: GeneralSolemnity,
            colors: [White],
            obligation: true,
            transfer: AnticipateBeforeHolyWeek,
        },
        celebration! { id: "turibius_of_mogrovejo_bishop", date: fixed(3, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "annunciation_of_the_lord", date: fixed(3, 25), rank: Solemnity, precedence: GeneralSolemnity, colors: [White] },
        // --- April ----------------------------------------------------------
        celebration! { id: "francis_of_paola_hermit", date: fixed(4, 2), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "isidore_of_seville_bishop", date: fixed(4, 4), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "vincent_ferrer_priest", date: fixed(4, 5), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_baptist_de_la_salle_priest", date: fixed(4, 7), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "stanislaus_of_szczepanow_bishop", date: fixed(4, 11), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "martin_i_pope", date: fixed(4, 13), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "anselm_of_canterbury_bishop", date: fixed(4, 21), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "george_of_lydda_martyr", date: fixed(4, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "adalbert_of_prague_bishop", date: fixed(4, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "fidelis_of_sigmaringen_priest", date: fixed(4, 24), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "mark_evangelist", date: fixed(4, 25), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "peter_chanel_priest", date: fixed(4, 28), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "louis_grignion_de_montfort_priest", date: fixed(4, 28), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "catherine_of_siena_virgin", date: fixed(4, 29), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "pius_v_pope", date: fixed(4, 30), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        // --- May ------------------------------------------------------------
        celebration! { id: "joseph_the_worker", date: fixed(5, 1), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "athanasius_of_alexandria_bishop", date: fixed(5, 2), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "philip_and_james_apostles", date: fixed(5, 3), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "john_of_avila_priest", date: fixed(5, 10), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "nereus_of_terracina_and_achilleus_of_terracina_martyrs", date: fixed(5, 12), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "pancras_of_rome_martyr", date: fixed(5, 12), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "our_lady_of_fatima", date: fixed(5, 13), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "matthias_apostle", date: fixed(5, 14), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "john_i_pope", date: fixed(5, 18), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "bernardine_of_siena_priest", date: fixed(5, 20), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "christopher_magallanes_priest_and_companions_martyrs", date: fixed(5, 21), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "rita_of_cascia_religious", date: fixed(5, 22), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "bede_the_venerable_priest", date: fixed(5, 25), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "gregory_vii_pope", date: fixed(5, 25), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "mary_magdalene_de_pazzi_virgin", date: fixed(5, 25), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "philip_neri_priest", date: fixed(5, 26), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "augustine_of_canterbury_bishop", date: fixed(5, 27), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "paul_vi_pope", date: fixed(5, 29), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "visitation_of_the_blessed_virgin_mary", date: fixed(5, 31), rank: Feast, precedence: GeneralFeast, colors: [White] },
        // --- June -----------------------------------------------------------
        celebration! { id: "justin_martyr", date: fixed(6, 1), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "marcellinus_of_rome_and_peter_the_exorcist_martyrs", date: fixed(6, 2), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "charles_lwanga_and_companions_martyrs", date: fixed(6, 3), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "boniface_of_mainz_bishop", date: fixed(6, 5), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "norbert_of_xanten_bishop", date: fixed(6, 6), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "ephrem_the_syrian_deacon", date: fixed(6, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "barnabas_apostle", date: fixed(6, 11), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "anthony_of_padua_priest", date: fixed(6, 13), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "romuald_of_ravenna_abbot", date: fixed(6, 19), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "aloysius_gonzaga_religious", date: fixed(6, 21), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "paulinus_of_nola_bishop", date: fixed(6, 22), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_fisher_bishop_and_thomas_more_martyrs", date: fixed(6, 22), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "nativity_of_saint_john_the_baptist", date: fixed(6, 24), rank: Solemnity, precedence: GeneralSolemnity, colors: [White] },
        celebration! { id: "cyril_of_alexandria_bishop", date: fixed(6, 27), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "irenaeus_of_lyon_bishop", date: fixed(6, 28), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! {
            id: "peter_and_paul_apostles",
            date: fixed(6, 29),
            rank: Solemnity,
            precedence: GeneralSolemnity,
            colors: [Red],
            obligation: true,
        },
        celebration! { id: "first_martyrs_of_the_holy_roman_church", date: fixed(6, 30), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        // --- July -----------------------------------------------------------
        celebration! { id: "thomas_apostle", date: fixed(7, 3), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "elizabeth_of_portugal", date: fixed(7, 4), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "anthony_zaccaria_priest", date: fixed(7, 5), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "maria_goretti_virgin", date: fixed(7, 6), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "augustine_zhao_rong_priest_and_companions_martyrs", date: fixed(7, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "benedict_of_nursia_abbot", date: fixed(7, 11), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "henry_ii_emperor", date: fixed(7, 13), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "camillus_de_lellis_priest", date: fixed(7, 14), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "bonaventure_of_bagnoregio_bishop", date: fixed(7, 15), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "our_lady_of_mount_carmel", date: fixed(7, 16), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "apollinaris_of_ravenna_bishop", date: fixed(7, 20), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "lawrence_of_brindisi_priest", date: fixed(7, 21), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "mary_magdalene", date: fixed(7, 22), rank: Feast, precedence: GeneralFeast, colors: [White] },
        celebration! { id: "bridget_of_sweden_religious", date: fixed(7, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "sharbel_makhluf_priest", date: fixed(7, 24), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "james_apostle", date: fixed(7, 25), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "joachim_and_anne_parents_of_mary", date: fixed(7, 26), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "martha_mary_and_lazarus_of_bethany", date: fixed(7, 29), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "peter_chrysologus_bishop", date: fixed(7, 30), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "ignatius_of_loyola_priest", date: fixed(7, 31), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        // --- August ---------------------------------------------------------
        celebration! { id: "alphonsus_mary_liguori_bishop", date: fixed(8, 1), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "eusebius_of_vercelli_bishop", date: fixed(8, 2), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "peter_julian_eymard_priest", date: fixed(8, 2), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_mary_vianney_priest", date: fixed(8, 4), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "dedication_of_the_basilica_of_saint_mary_major", date: fixed(8, 5), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "transfiguration_of_the_lord", date: fixed(8, 6), rank: Feast, precedence: GeneralLordFeast, colors: [White] },
        celebration! { id: "sixtus_ii_pope_and_companions_martyrs", date: fixed(8, 7), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "cajetan_of_thiene_priest", date: fixed(8, 7), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "dominic_de_guzman_priest", date: fixed(8, 8), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "teresa_benedicta_of_the_cross_edith_stein_virgin", date: fixed(8, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "lawrence_of_rome_deacon", date: fixed(8, 10), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "clare_of_assisi_virgin", date: fixed(8, 11), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "jane_frances_de_chantal_religious", date: fixed(8, 12), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "pontian_i_pope_and_hippolytus_of_rome_priest", date: fixed(8, 13), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "maximilian_kolbe_priest", date: fixed(8, 14), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! {
            id: "assumption_of_the_blessed_virgin_mary",
            date: fixed(8, 15),
            rank: Solemnity,
            precedence: GeneralSolemnity,
            colors: [White],
            obligation: true,
        },
        celebration! { id: "stephen_of_hungary", date: fixed(8, 16), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_eudes_priest", date: fixed(8, 19), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "bernard_of_clairvaux_abbot", date: fixed(8, 20), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "pius_x_pope", date: fixed(8, 21), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "queenship_of_the_blessed_virgin_mary", date: fixed(8, 22), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "rose_of_lima_virgin", date: fixed(8, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "bartholomew_apostle", date: fixed(8, 24), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "louis_ix_of_france", date: fixed(8, 25), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "joseph_calasanz_priest", date: fixed(8, 25), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "monica_of_hippo", date: fixed(8, 27), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "augustine_of_hippo_bishop", date: fixed(8, 28), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "passion_of_saint_john_the_baptist", date: fixed(8, 29), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        // --- September ------------------------------------------------------
        celebration! { id: "gregory_the_great_pope", date: fixed(9, 3), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "nativity_of_the_blessed_virgin_mary", date: fixed(9, 8), rank: Feast, precedence: GeneralFeast, colors: [White] },
        celebration! { id: "peter_claver_priest", date: fixed(9, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "most_holy_name_of_the_blessed_virgin_mary", date: fixed(9, 12), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_chrysostom_bishop", date: fixed(9, 13), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "exaltation_of_the_holy_cross", date: fixed(9, 14), rank: Feast, precedence: GeneralLordFeast, colors: [Red] },
        celebration! { id: "our_lady_of_sorrows", date: fixed(9, 15), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "cornelius_i_pope_and_cyprian_of_carthage_bishop", date: fixed(9, 16), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "robert_bellarmine_bishop", date: fixed(9, 17), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "hildegard_of_bingen_abbess", date: fixed(9, 17), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "januarius_i_of_benevento_bishop", date: fixed(9, 19), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "andrew_kim_tae_gon_priest_paul_chong_ha_sang_and_companions_martyrs", date: fixed(9, 20), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "matthew_apostle", date: fixed(9, 21), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "pius_of_pietrelcina_priest", date: fixed(9, 23), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "cosmas_of_cilicia_and_damian_of_cilicia_martyrs", date: fixed(9, 26), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "vincent_de_paul_priest", date: fixed(9, 27), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "wenceslaus_i_of_bohemia_martyr", date: fixed(9, 28), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "lawrence_ruiz_and_companions_martyrs", date: fixed(9, 28), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "michael_gabriel_and_raphael_archangels", date: fixed(9, 29), rank: Feast, precedence: GeneralFeast, colors: [White] },
        celebration! { id: "jerome_of_stridon_priest", date: fixed(9, 30), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        // --- October --------------------------------------------------------
        celebration! { id: "therese_of_the_child_jesus_and_the_holy_face_of_lisieux_virgin", date: fixed(10, 1), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "holy_guardian_angels", date: fixed(10, 2), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "francis_of_assisi", date: fixed(10, 4), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "faustina_kowalska_virgin", date: fixed(10, 5), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "bruno_of_cologne_priest", date: fixed(10, 6), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "our_lady_of_the_rosary", date: fixed(10, 7), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "denis_of_paris_bishop_and_companions_martyrs", date: fixed(10, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "john_leonardi_priest", date: fixed(10, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_xxiii_pope", date: fixed(10, 11), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "callistus_i_pope", date: fixed(10, 14), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "teresa_of_jesus_of_avila_virgin", date: fixed(10, 15), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "hedwig_of_silesia_religious", date: fixed(10, 16), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "margaret_mary_alacoque_virgin", date: fixed(10, 16), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "ignatius_of_antioch_bishop", date: fixed(10, 17), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "luke_evangelist", date: fixed(10, 18), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "john_de_brebeuf_and_isaac_jogues_priests_and_companions_martyrs", date: fixed(10, 19), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "paul_of_the_cross_priest", date: fixed(10, 19), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_paul_ii_pope", date: fixed(10, 22), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_of_capistrano_priest", date: fixed(10, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "anthony_mary_claret_bishop", date: fixed(10, 24), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "simon_and_jude_apostles", date: fixed(10, 28), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        // --- November -------------------------------------------------------
        celebration! { id: "all_saints", date: fixed(11, 1), rank: Solemnity, precedence: GeneralSolemnity, colors: [White], obligation: true },
        celebration! {
            id: "commemoration_of_all_the_faithful_departed",
            date: fixed(11, 2),
            rank: Solemnity,
            precedence: AllSouls,
            colors: [Violet, Black],
        },
        celebration! { id: "martin_de_porres_religious", date: fixed(11, 3), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "charles_borromeo_bishop", date: fixed(11, 4), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "dedication_of_the_lateran_basilica", date: fixed(11, 9), rank: Feast, precedence: GeneralLordFeast, colors: [White] },
        celebration! { id: "leo_the_great_pope", date: fixed(11, 10), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "martin_of_tours_bishop", date: fixed(11, 11), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "josaphat_kuntsevych_bishop", date: fixed(11, 12), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "albert_the_great_bishop", date: fixed(11, 15), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "margaret_of_scotland", date: fixed(11, 16), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "gertrude_the_great_virgin", date: fixed(11, 16), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "elizabeth_of_hungary_religious", date: fixed(11, 17), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "dedication_of_the_basilicas_of_saints_peter_and_paul_apostles", date: fixed(11, 18), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "presentation_of_the_blessed_virgin_mary", date: fixed(11, 21), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "cecilia_of_rome_virgin", date: fixed(11, 22), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "clement_i_pope", date: fixed(11, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "columban_of_ireland_abbot", date: fixed(11, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "andrew_dung_lac_priest_and_companions_martyrs", date: fixed(11, 24), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "catherine_of_alexandria_virgin", date: fixed(11, 25), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "andrew_apostle", date: fixed(11, 30), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        // --- December -------------------------------------------------------
        celebration! { id: "francis_xavier_priest", date: fixed(12, 3), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "john_damascene_priest", date: fixed(12, 4), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "nicholas_of_myra_bishop", date: fixed(12, 6), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "ambrose_of_milan_bishop", date: fixed(12, 7), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! {
            id: "immaculate_conception_of_the_blessed_virgin_mary",
            date: fixed(12, 8),
            rank: Solemnity,
            precedence: GeneralSolemnity,
            colors: [White],
            obligation: true,
        },
        celebration! { id: "juan_diego_cuauhtlatoatzin", date: fixed(12, 9), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "our_lady_of_loreto", date: fixed(12, 10), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "damasus_i_pope", date: fixed(12, 11), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "our_lady_of_guadalupe", date: fixed(12, 12), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "lucy_of_syracuse_virgin", date: fixed(12, 13), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [Red] },
        celebration! { id: "john_of_the_cross_priest", date: fixed(12, 14), rank: ObligatoryMemorial, precedence: GeneralMemorial, colors: [White] },
        celebration! { id: "peter_canisius_priest", date: fixed(12, 21), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "john_of_kanty_priest", date: fixed(12, 23), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
        celebration! { id: "stephen_the_first_martyr", date: fixed(12, 26), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "john_apostle", date: fixed(12, 27), rank: Feast, precedence: GeneralFeast, colors: [White] },
        celebration! { id: "holy_innocents_martyrs", date: fixed(12, 28), rank: Feast, precedence: GeneralFeast, colors: [Red] },
        celebration! { id: "thomas_becket_bishop", date: fixed(12, 29), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [Red] },
        celebration! { id: "sylvester_i_pope", date: fixed(12, 31), rank: OptionalMemorial, precedence: OptionalMemorial, colors: [White] },
    ]
});
