pub mod outfile;
