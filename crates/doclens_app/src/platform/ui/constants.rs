pub const PROMPT: &str = "doclens> ";

pub const BANNER: &str = "DocLens - Intelligent Document Analysis";

pub const PROCESSING: &str = "Processing document and generating answers...";

pub const HELP: &[&str] = &[
    "Commands:",
    "  url <address>    set the PDF document URL (no address clears it)",
    "  add              add another question",
    "  q <n> <text>     set the text of question n",
    "  rm <n>           remove question n",
    "  submit           process the document and get answers",
    "  show             print the current session",
    "  help             print this help",
    "  quit             leave",
];
