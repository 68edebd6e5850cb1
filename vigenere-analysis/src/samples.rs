//! Exercise ciphertexts, both French plaintext under a four-letter key

/// Long enough for repeated polygrams to reveal the key length.
pub const KASISKI_EXERCISE: &str = "zbpuevpuqsdlzgllksousvpasfpddggaqwptdgptzweemqzrdjtddefekeferdpr\
    rcyndgluaowcnbptzzzrbvpssfpashpncotemhaeqrferdlrlwwertlussfikgoe\
    uswotfdgqsyasrlnrzppdhtticfrciwurhcezrpmhtpuwiyenamrdbzyzwelzuca\
    mrptzqseqcfgdrfrhrpatsepzgfnaffisbpvdblisrplzgnemswaqoxpdseehbee\
    ksdptdttqsdddgxurwnidbdddplncsdddplncsd";

/// Cracked with the index of coincidence.
pub const COINCIDENCE_EXERCISE: &str = "uzssgbufmdymbfykciyfrockmbnsxovanzcgfvyigslgkofwpsmjqqbwdqbwedim\
    daiftwmlawlwpsfggwmpujdwfcgtmwjsdvukmfxkgffweayeawlweryepollmuhs\
    zwghdwgweqieysfsbzoksfufpsjsdhcwpsmggjlsssmvqqylfsyhaeowaifweool\
    qilkfshsushlmrcjqzunqfclqgufeofdqfzsufymzhimddfmecoeawhkxchymzut\
    mgnaxzysmamlqfxsyqbwldcwdfyjaiawxsnaffyeqgyvgwmafxydqgyebcllmwwz\
    qngguopwozuhqfgaegcgzryexswgzgyjhonwgfvaqbyffshvgxydqgxwhclsu";
