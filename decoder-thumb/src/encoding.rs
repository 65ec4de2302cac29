//! The closed catalog of Thumb / Thumb-2 encoding identifiers.
//!
//! One value per row of the architecture's instruction-encoding tables,
//! named after the manual's per-instruction headings (mnemonic plus the
//! encoding-table identifier). Four sentinel values cover the outcomes that
//! are not concrete instructions; both dispatch trees share them.

/// Generates the catalog in one pass so the enum, the display-name table and
/// the `ALL` iteration list cannot drift apart.
macro_rules! encodings {
    ($($variant:ident => $name:literal,)*) => {
        #[allow(non_camel_case_types)]
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum Encoding {
            $($variant,)*
        }

        impl Encoding {
            /// Every catalog value, sentinels included.
            pub const ALL: &'static [Encoding] = &[$(Encoding::$variant,)*];

            /// Canonical display name: mnemonic plus encoding-variant suffix.
            pub fn display_name(self) -> &'static str {
                match self {
                    $(Encoding::$variant => $name,)*
                }
            }
        }
    };
}

encodings! {
    // Sentinels. Ordinary return values of the dispatch trees, never faults.
    UNDEFINED => "UNDEFINED",
    UNPREDICTABLE => "UNPREDICTABLE",
    UNALLOCATED => "UNALLOCATED",
    INVALID => "INVALID",

    // 16-bit encodings.
    ADC_REG_T1 => "ADC (register) T1",
    ADD_IMM_T1 => "ADD (immediate) T1",
    ADD_IMM_T2 => "ADD (immediate) T2",
    ADD_REG_T1 => "ADD (register) T1",
    ADD_REG_T2 => "ADD (register) T2",
    ADD_SP_IMM_T1 => "ADD (SP plus immediate) T1",
    ADD_SP_IMM_T2 => "ADD (SP plus immediate) T2",
    ADR_T1 => "ADR T1",
    AND_REG_T1 => "AND (register) T1",
    ASR_IMM_T1 => "ASR (immediate) T1",
    ASR_REG_T1 => "ASR (register) T1",
    B_T1 => "B T1",
    B_T2 => "B T2",
    BIC_REG_T1 => "BIC (register) T1",
    BKPT_T1 => "BKPT T1",
    BLX_REG_T1 => "BLX (register) T1",
    BX_T1 => "BX T1",
    CBNZ_T1 => "CBNZ T1",
    CBZ_T1 => "CBZ T1",
    CMN_REG_T1 => "CMN (register) T1",
    CMP_IMM_T1 => "CMP (immediate) T1",
    CMP_REG_T1 => "CMP (register) T1",
    CMP_REG_T2 => "CMP (register) T2",
    CPS_T1 => "CPS T1",
    EOR_REG_T1 => "EOR (register) T1",
    IT_T1 => "IT T1",
    LDM_T1 => "LDM T1",
    LDR_IMM_T1 => "LDR (immediate) T1",
    LDR_IMM_T2 => "LDR (immediate) T2",
    LDR_LIT_T1 => "LDR (literal) T1",
    LDR_REG_T1 => "LDR (register) T1",
    LDRB_IMM_T1 => "LDRB (immediate) T1",
    LDRB_REG_T1 => "LDRB (register) T1",
    LDRH_IMM_T1 => "LDRH (immediate) T1",
    LDRH_REG_T1 => "LDRH (register) T1",
    LDRSB_REG_T1 => "LDRSB (register) T1",
    LDRSH_REG_T1 => "LDRSH (register) T1",
    LSL_IMM_T1 => "LSL (immediate) T1",
    LSL_REG_T1 => "LSL (register) T1",
    LSR_IMM_T1 => "LSR (immediate) T1",
    LSR_REG_T1 => "LSR (register) T1",
    MOV_IMM_T1 => "MOV (immediate) T1",
    MOV_REG_T1 => "MOV (register) T1",
    MUL_T1 => "MUL T1",
    MVN_REG_T1 => "MVN (register) T1",
    NOP_T1 => "NOP T1",
    ORR_REG_T1 => "ORR (register) T1",
    POP_T1 => "POP T1",
    PUSH_T1 => "PUSH T1",
    REV_T1 => "REV T1",
    REV16_T1 => "REV16 T1",
    REVSH_T1 => "REVSH T1",
    ROR_REG_T1 => "ROR (register) T1",
    RSB_IMM_T1 => "RSB (immediate) T1",
    SBC_REG_T1 => "SBC (register) T1",
    SEV_T1 => "SEV T1",
    STM_T1 => "STM T1",
    STR_IMM_T1 => "STR (immediate) T1",
    STR_IMM_T2 => "STR (immediate) T2",
    STR_REG_T1 => "STR (register) T1",
    STRB_IMM_T1 => "STRB (immediate) T1",
    STRB_REG_T1 => "STRB (register) T1",
    STRH_IMM_T1 => "STRH (immediate) T1",
    STRH_REG_T1 => "STRH (register) T1",
    SUB_IMM_T1 => "SUB (immediate) T1",
    SUB_IMM_T2 => "SUB (immediate) T2",
    SUB_REG_T1 => "SUB (register) T1",
    SUB_SP_IMM_T1 => "SUB (SP minus immediate) T1",
    SVC_T1 => "SVC T1",
    SXTB_T1 => "SXTB T1",
    SXTH_T1 => "SXTH T1",
    TST_REG_T1 => "TST (register) T1",
    UXTB_T1 => "UXTB T1",
    UXTH_T1 => "UXTH T1",
    WFE_T1 => "WFE T1",
    WFI_T1 => "WFI T1",
    YIELD_T1 => "YIELD T1",

    // 32-bit encodings: load/store multiple, dual and exclusive.
    LDM_T2 => "LDM T2",
    LDMDB_T1 => "LDMDB T1",
    LDRD_IMM_T1 => "LDRD (immediate) T1",
    LDRD_LIT_T1 => "LDRD (literal) T1",
    LDREX_T1 => "LDREX T1",
    LDREXB_T1 => "LDREXB T1",
    LDREXH_T1 => "LDREXH T1",
    POP_T2 => "POP T2",
    PUSH_T2 => "PUSH T2",
    STM_T2 => "STM T2",
    STMDB_T1 => "STMDB T1",
    STRD_IMM_T1 => "STRD (immediate) T1",
    STREX_T1 => "STREX T1",
    STREXB_T1 => "STREXB T1",
    STREXH_T1 => "STREXH T1",
    TBB_T1 => "TBB T1",
    TBH_T1 => "TBH T1",

    // Data processing, shifted register.
    ADC_REG_T2 => "ADC (register) T2",
    ADD_REG_T3 => "ADD (register) T3",
    AND_REG_T2 => "AND (register) T2",
    ASR_IMM_T2 => "ASR (immediate) T2",
    BIC_REG_T2 => "BIC (register) T2",
    CMN_REG_T2 => "CMN (register) T2",
    CMP_REG_T3 => "CMP (register) T3",
    EOR_REG_T2 => "EOR (register) T2",
    LSL_IMM_T2 => "LSL (immediate) T2",
    LSR_IMM_T2 => "LSR (immediate) T2",
    MOV_REG_T3 => "MOV (register) T3",
    MVN_REG_T2 => "MVN (register) T2",
    ORN_REG_T1 => "ORN (register) T1",
    ORR_REG_T2 => "ORR (register) T2",
    PKHBT_T1 => "PKHBT T1",
    ROR_IMM_T1 => "ROR (immediate) T1",
    RRX_T1 => "RRX T1",
    RSB_REG_T1 => "RSB (register) T1",
    SBC_REG_T2 => "SBC (register) T2",
    SUB_REG_T2 => "SUB (register) T2",
    TEQ_REG_T1 => "TEQ (register) T1",
    TST_REG_T2 => "TST (register) T2",

    // Data processing, modified immediate.
    ADC_IMM_T1 => "ADC (immediate) T1",
    ADD_IMM_T3 => "ADD (immediate) T3",
    AND_IMM_T1 => "AND (immediate) T1",
    BIC_IMM_T1 => "BIC (immediate) T1",
    CMN_IMM_T1 => "CMN (immediate) T1",
    CMP_IMM_T2 => "CMP (immediate) T2",
    EOR_IMM_T1 => "EOR (immediate) T1",
    MOV_IMM_T2 => "MOV (immediate) T2",
    MVN_IMM_T1 => "MVN (immediate) T1",
    ORN_IMM_T1 => "ORN (immediate) T1",
    ORR_IMM_T1 => "ORR (immediate) T1",
    RSB_IMM_T2 => "RSB (immediate) T2",
    SBC_IMM_T1 => "SBC (immediate) T1",
    SUB_IMM_T3 => "SUB (immediate) T3",
    TEQ_IMM_T1 => "TEQ (immediate) T1",
    TST_IMM_T1 => "TST (immediate) T1",

    // Data processing, plain binary immediate.
    ADD_IMM_T4 => "ADD (immediate) T4",
    ADR_T2 => "ADR T2",
    ADR_T3 => "ADR T3",
    BFC_T1 => "BFC T1",
    BFI_T1 => "BFI T1",
    MOV_IMM_T3 => "MOV (immediate) T3",
    MOVT_T1 => "MOVT T1",
    SBFX_T1 => "SBFX T1",
    SSAT_T1 => "SSAT T1",
    SSAT16_T1 => "SSAT16 T1",
    SUB_IMM_T4 => "SUB (immediate) T4",
    UBFX_T1 => "UBFX T1",
    USAT_T1 => "USAT T1",
    USAT16_T1 => "USAT16 T1",

    // Branches and miscellaneous control.
    B_T3 => "B T3",
    B_T4 => "B T4",
    BL_T1 => "BL T1",
    CLREX_T1 => "CLREX T1",
    DBG_T1 => "DBG T1",
    DMB_T1 => "DMB T1",
    DSB_T1 => "DSB T1",
    ISB_T1 => "ISB T1",
    MRS_T1 => "MRS T1",
    MSR_T1 => "MSR T1",
    NOP_T2 => "NOP T2",
    SEV_T2 => "SEV T2",
    WFE_T2 => "WFE T2",
    WFI_T2 => "WFI T2",
    YIELD_T2 => "YIELD T2",

    // Single load/store.
    LDR_IMM_T3 => "LDR (immediate) T3",
    LDR_IMM_T4 => "LDR (immediate) T4",
    LDR_LIT_T2 => "LDR (literal) T2",
    LDR_REG_T2 => "LDR (register) T2",
    LDRB_IMM_T2 => "LDRB (immediate) T2",
    LDRB_IMM_T3 => "LDRB (immediate) T3",
    LDRB_LIT_T1 => "LDRB (literal) T1",
    LDRB_REG_T2 => "LDRB (register) T2",
    LDRBT_T1 => "LDRBT T1",
    LDRH_IMM_T3 => "LDRH (immediate) T3",
    LDRH_LIT_T1 => "LDRH (literal) T1",
    LDRH_REG_T2 => "LDRH (register) T2",
    LDRHT_T1 => "LDRHT T1",
    LDRSB_IMM_T1 => "LDRSB (immediate) T1",
    LDRSB_IMM_T2 => "LDRSB (immediate) T2",
    LDRSB_LIT_T1 => "LDRSB (literal) T1",
    LDRSB_REG_T2 => "LDRSB (register) T2",
    LDRSBT_T1 => "LDRSBT T1",
    LDRSH_IMM_T1 => "LDRSH (immediate) T1",
    LDRSH_IMM_T2 => "LDRSH (immediate) T2",
    LDRSH_LIT_T1 => "LDRSH (literal) T1",
    LDRSH_REG_T2 => "LDRSH (register) T2",
    LDRSHT_T1 => "LDRSHT T1",
    LDRT_T1 => "LDRT T1",
    PLD_IMM_T1 => "PLD (immediate) T1",
    PLD_IMM_T2 => "PLD (immediate) T2",
    PLD_IMM_LIT_T2 => "PLD (immediate, literal) T2",
    PLD_LIT_T1 => "PLD (literal) T1",
    PLD_REG_T1 => "PLD (register) T1",
    PLI_IMM_LIT_T1 => "PLI (immediate, literal) T1",
    PLI_IMM_LIT_T3 => "PLI (immediate, literal) T3",
    PLI_REG_T1 => "PLI (register) T1",
    STR_IMM_T3 => "STR (immediate) T3",
    STR_IMM_T4 => "STR (immediate) T4",
    STR_REG_T2 => "STR (register) T2",
    STRB_IMM_T2 => "STRB (immediate) T2",
    STRB_IMM_T3 => "STRB (immediate) T3",
    STRB_REG_T2 => "STRB (register) T2",
    STRH_IMM_T2 => "STRH (immediate) T2",
    STRH_IMM_T3 => "STRH (immediate) T3",
    STRH_REG_T2 => "STRH (register) T2",

    // Data processing, register.
    ASR_REG_T2 => "ASR (register) T2",
    CLZ_T1 => "CLZ T1",
    LSL_REG_T2 => "LSL (register) T2",
    LSR_REG_T2 => "LSR (register) T2",
    QADD_T1 => "QADD T1",
    QDADD_T1 => "QDADD T1",
    QDSUB_T1 => "QDSUB T1",
    QSUB_T1 => "QSUB T1",
    RBIT_T1 => "RBIT T1",
    REV_T2 => "REV T2",
    REV16_T2 => "REV16 T2",
    REVSH_T2 => "REVSH T2",
    ROR_REG_T2 => "ROR (register) T2",
    SEL_T1 => "SEL T1",
    SXTAB_T1 => "SXTAB T1",
    SXTAB16_T1 => "SXTAB16 T1",
    SXTAH_T1 => "SXTAH T1",
    SXTB_T2 => "SXTB T2",
    SXTB16_T1 => "SXTB16 T1",
    SXTH_T2 => "SXTH T2",
    UXTAB_T1 => "UXTAB T1",
    UXTAB16_T1 => "UXTAB16 T1",
    UXTAH_T1 => "UXTAH T1",
    UXTB_T2 => "UXTB T2",
    UXTB16_T1 => "UXTB16 T1",
    UXTH_T2 => "UXTH T2",

    // Parallel add/subtract.
    QADD8_T1 => "QADD8 T1",
    QADD16_T1 => "QADD16 T1",
    QASX_T1 => "QASX T1",
    QSAX_T1 => "QSAX T1",
    QSUB8_T1 => "QSUB8 T1",
    QSUB16_T1 => "QSUB16 T1",
    SADD8_T1 => "SADD8 T1",
    SADD16_T1 => "SADD16 T1",
    SASX_T1 => "SASX T1",
    SHADD8_T1 => "SHADD8 T1",
    SHADD16_T1 => "SHADD16 T1",
    SHASX_T1 => "SHASX T1",
    SHSAX_T1 => "SHSAX T1",
    SHSUB8_T1 => "SHSUB8 T1",
    SHSUB16_T1 => "SHSUB16 T1",
    SSAX_T1 => "SSAX T1",
    SSUB8_T1 => "SSUB8 T1",
    SSUB16_T1 => "SSUB16 T1",
    UADD8_T1 => "UADD8 T1",
    UADD16_T1 => "UADD16 T1",
    UASX_T1 => "UASX T1",
    UHADD8_T1 => "UHADD8 T1",
    UHADD16_T1 => "UHADD16 T1",
    UHASX_T1 => "UHASX T1",
    UHSAX_T1 => "UHSAX T1",
    UHSUB8_T1 => "UHSUB8 T1",
    UHSUB16_T1 => "UHSUB16 T1",
    UQADD8_T1 => "UQADD8 T1",
    UQADD16_T1 => "UQADD16 T1",
    UQASX_T1 => "UQASX T1",
    UQSAX_T1 => "UQSAX T1",
    UQSUB8_T1 => "UQSUB8 T1",
    UQSUB16_T1 => "UQSUB16 T1",
    USAX_T1 => "USAX T1",
    USUB8_T1 => "USUB8 T1",
    USUB16_T1 => "USUB16 T1",

    // Multiply, multiply accumulate, absolute difference.
    MLA_T1 => "MLA T1",
    MLS_T1 => "MLS T1",
    MUL_T2 => "MUL T2",
    SMLABB_T1 => "SMLABB T1",
    SMLABT_T1 => "SMLABT T1",
    SMLAD_T1 => "SMLAD T1",
    SMLADX_T1 => "SMLADX T1",
    SMLATB_T1 => "SMLATB T1",
    SMLATT_T1 => "SMLATT T1",
    SMLAWB_T1 => "SMLAWB T1",
    SMLAWT_T1 => "SMLAWT T1",
    SMLSD_T1 => "SMLSD T1",
    SMLSDX_T1 => "SMLSDX T1",
    SMMLA_T1 => "SMMLA T1",
    SMMLAR_T1 => "SMMLAR T1",
    SMMLS_T1 => "SMMLS T1",
    SMMLSR_T1 => "SMMLSR T1",
    SMMUL_T1 => "SMMUL T1",
    SMMULR_T1 => "SMMULR T1",
    SMUAD_T1 => "SMUAD T1",
    SMUADX_T1 => "SMUADX T1",
    SMULBB_T1 => "SMULBB T1",
    SMULBT_T1 => "SMULBT T1",
    SMULTB_T1 => "SMULTB T1",
    SMULTT_T1 => "SMULTT T1",
    SMULWB_T1 => "SMULWB T1",
    SMULWT_T1 => "SMULWT T1",
    SMUSD_T1 => "SMUSD T1",
    SMUSDX_T1 => "SMUSDX T1",
    USAD8_T1 => "USAD8 T1",
    USADA8_T1 => "USADA8 T1",

    // Long multiply, long multiply accumulate, divide.
    SDIV_T1 => "SDIV T1",
    SMLAL_T1 => "SMLAL T1",
    SMLALBB_T1 => "SMLALBB T1",
    SMLALBT_T1 => "SMLALBT T1",
    SMLALTB_T1 => "SMLALTB T1",
    SMLALTT_T1 => "SMLALTT T1",
    SMLALD_T1 => "SMLALD T1",
    SMLALDX_T1 => "SMLALDX T1",
    SMLSLD_T1 => "SMLSLD T1",
    SMLSLDX_T1 => "SMLSLDX T1",
    SMULL_T1 => "SMULL T1",
    UDIV_T1 => "UDIV T1",
    UMAAL_T1 => "UMAAL T1",
    UMLAL_T1 => "UMLAL T1",
    UMULL_T1 => "UMULL T1",

    // Coprocessor.
    CDP_T1 => "CDP T1",
    CDP_T2 => "CDP2 T2",
    LDC_IMM_T1 => "LDC (immediate) T1",
    LDC_IMM_T2 => "LDC2 (immediate) T2",
    LDC_LIT_T1 => "LDC (literal) T1",
    LDC_LIT_T2 => "LDC2 (literal) T2",
    MCR_T1 => "MCR T1",
    MCR_T2 => "MCR2 T2",
    MCRR_T1 => "MCRR T1",
    MCRR_T2 => "MCRR2 T2",
    MRC_T1 => "MRC T1",
    MRC_T2 => "MRC2 T2",
    MRRC_T1 => "MRRC T1",
    MRRC_T2 => "MRRC2 T2",
    STC_T1 => "STC T1",
    STC_T2 => "STC2 T2",
}

impl Encoding {
    /// Whether this value reports a decode outcome rather than a concrete
    /// instruction variant.
    pub fn is_sentinel(self) -> bool {
        matches!(
            self,
            Encoding::UNDEFINED
                | Encoding::UNPREDICTABLE
                | Encoding::UNALLOCATED
                | Encoding::INVALID
        )
    }
}

impl std::fmt::Display for Encoding {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
