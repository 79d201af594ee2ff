// Hand-written reviews classified at the end of every training
// run, from clear-cut one-liners to long, mixed user reviews.
// The long ones are the only sample inputs far beyond the
// 64-token pad length.

pub const SAMPLE_REVIEWS: [&str; 8] = [
    "What an excellent performance",
    "The performance was worst just a waste of money ",
    "Moderate it was ok ok tmr it might be good c u n8",
    r#" Season 4 - Stuck in a Rut Script
westsideschl1 January 2021
1. Overacted like reciting highly scripted very fake dialogue,
and all in sequence as if after every short line the director pauses to allow the actors to memorize the next line.
And, of course, practice a devilish smile.
2. Over reliance on romance issues with the usual eye candy actors.
Lucifer, of course, has short beard growth (very manly fake) as if the devil really needs that along with muscles (shown frequently).
Why for someone with God like super powers. To showcase the body we have a very fake (and overused) holding up a car as it's wheels spin in trying to get away.
3. The usual 10 seconds of staged dead body scene (very cheaply popular in crime series); the usual interdepartmental detective conflicts & issues. 4. Special effects consist mostly of two cheap (thankfully always brief) film items: Colored eyes (seen in all superpower movies),
  and wings that are so cheap they would fall apart if moved. 5. Hell looked like a studio CGI quickie: A background of trees; above are clouds;
  the throne is a jagged rock nestled amongst other fake jagged rocks. Huh! Not the Hell I know.
Anyway, gotta have a King to sit there to stop (contain) the demons of Hell from coming to Earth.
Please, send the demons, they would be a lot more interesting than this script."#,
    r#"Lucifer should have stayed dead.
John6Daniels20 March 2021
Its just a show the glorifies being a bad person.

Lucifer is hash TV. It go can'd because it was hash then they resurrect her and its still hash.

Overall good quality alone can't save this show.

What can be learned? To glorify negativity.

Verdict: I ain't no Christian but this show is Hell bound...Again... "#,
    r#"Lucifer is a great show, a lot of it is the charming and amusing devil we all love to see.
The strength of this show is the balance it strikes between the detective work and the biblical/divine elements.
The greatest punch is delivered when one drives the other.
Lucifer made a strong start and I think the first seasons were it's best.
Low points include too much of the detective work and less biblical elements, it then resembles CSI more and more.
You don't want another detective show. Less time should also be devoted to side characters like Maze.
They are often used as space fillers for no good reason, characters should appear when needed. Overall not too bad. I hope there are more episodes."#,
    "sorryyyyyy tmr onwards the show's gonna end",
    r#" A devil of a show - Ellis is excellent.
khunkrumark10 February 2016
Tom Ellis was brilliant as the love interest in Miranda - a screwball British comedy - so, check that out for more of him in a comedy role.

He's been an extremely busy actor for the last 15 years but this is the first time he's been let loose on an American audience.

There's nothing particularly original about the premise or the plots... man with a superpower makes everyone around him look like a bloody idiot - but the script and Ellis carry this off so well, that it doesn't matter.

The only danger is will it run out of steam? Will the writers rely on Ellis to carry the show through their inactivity?

For now though, this is the best comedy on TV.
Rating : - 10/10
"#,
];
